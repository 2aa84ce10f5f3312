//! Use-Case: Bubble per Drag verschieben (nur sichtbare Position).

use crate::app::AppState;
use crate::core::MemberId;

/// Startet den Drag einer Bubble und hebt sie in den Vordergrund.
pub fn begin_drag(state: &mut AppState, member_id: MemberId, pointer: glam::Vec2) {
    let Some(bubble) = state.canvas.scene.get_mut(&member_id) else {
        log::debug!("Drag-Start ignoriert: Bubble {} nicht vorhanden", member_id);
        return;
    };
    if state
        .canvas
        .drag
        .begin(member_id, pointer, bubble.position)
    {
        bubble.elevated = true;
    }
}

/// Aktualisiert die sichtbare Position der gezogenen Bubble (geklemmt).
pub fn update_drag(state: &mut AppState, pointer: glam::Vec2) {
    let bounds = state.canvas_bounds();
    if let Some((id, position)) = state.canvas.drag.update(pointer, &bounds) {
        if let Some(bubble) = state.canvas.scene.get_mut(&id) {
            bubble.position = position;
        }
    }
}

/// Beendet den Drag und liefert die zu speichernde Endposition.
pub fn finish_drag(state: &mut AppState) -> Option<(MemberId, glam::Vec2)> {
    let (id, position) = state.canvas.drag.finish()?;
    if let Some(bubble) = state.canvas.scene.get_mut(&id) {
        bubble.elevated = false;
    }
    Some((id, position))
}
