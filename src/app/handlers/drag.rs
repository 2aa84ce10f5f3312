//! Handler für den Drag-Lifecycle von Bubbles.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{MemberId, MemberPatch};
use crate::gateway::MemberStore;

/// Drag-Lifecycle Start.
pub fn begin(state: &mut AppState, member_id: MemberId, pointer: glam::Vec2) {
    use_cases::drag::begin_drag(state, member_id, pointer);
}

/// Drag-Lifecycle Update (nur sichtbar, noch nicht gespeichert).
pub fn update(state: &mut AppState, pointer: glam::Vec2) {
    use_cases::drag::update_drag(state, pointer);
}

/// Drag-Lifecycle Ende: speichert die Endposition.
///
/// Fehler werden nur geloggt; die sichtbare Position bleibt bis zum nächsten
/// Reload stehen.
pub async fn end<S: MemberStore>(state: &mut AppState, store: &S) {
    let Some((id, position)) = use_cases::drag::finish_drag(state) else {
        log::debug!("Pointer-Up ohne aktiven Drag");
        return;
    };

    match store.update(&id, MemberPatch::position(position)).await {
        Ok(()) => log::info!("Position saved: {} {}", position.x, position.y),
        Err(e) => log::error!("Error saving position: {}", e),
    }
}
