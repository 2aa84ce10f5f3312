//! Use-Case: Mitgliederliste ersetzen und neue Mitglieder platzieren.

use crate::app::render_scene;
use crate::app::state::{LoadStatus, MemberInput};
use crate::app::AppState;
use crate::core::{grid_position, MemberId, MemberRecord, NewMember, OwnerId};
use chrono::{DateTime, Utc};

/// Baut den neuen Datensatz inkl. Grid-Startposition.
///
/// Grundlage ist die Anzahl der aktuell geladenen Mitglieder und die Canvas
/// abzueglich des konfigurierten Randes.
pub fn plan_new_member(
    state: &AppState,
    owner_id: OwnerId,
    input: MemberInput,
    created_at: DateTime<Utc>,
) -> NewMember {
    let drawable = state
        .canvas_bounds()
        .drawable(state.options.canvas_margin);
    let position = grid_position(
        state.members.len(),
        drawable,
        state.options.grid_base_offset,
    );

    NewMember {
        owner_id,
        name: input.name,
        relation: input.relation,
        birth_year: input.birth_year,
        notes: input.notes,
        photo: state.photo.selected_photo().cloned(),
        position,
        created_at,
    }
}

/// Ersetzt Liste und Szene vollstaendig durch das Abfrageergebnis.
///
/// Ein laufender Drag gehoert zur alten Szene und wird ohne Speichern verworfen.
pub fn replace_members(state: &mut AppState, records: Vec<MemberRecord>) {
    if let Some(id) = state.canvas.drag.cancel() {
        log::debug!("Drag von {} durch Reload verworfen", id);
    }

    state.members = records;
    state.canvas.scene = render_scene::build(&state.members);
    state.canvas.load_status = if state.members.is_empty() {
        LoadStatus::Empty
    } else {
        LoadStatus::Loaded
    };
    log::info!("{} Mitglieder geladen", state.members.len());
}

/// Leert alle owner-gebundenen Daten (nach Abmeldung).
pub fn clear_members(state: &mut AppState) {
    state.members.clear();
    state.canvas.clear();
    state.canvas.load_status = LoadStatus::Idle;
    state.ui.pending_delete = None;
}

/// Rueckfrage-Text fuer ein Mitglied, sofern es angezeigt wird.
pub fn delete_prompt(state: &AppState, member_id: &MemberId) -> Option<String> {
    state
        .canvas
        .scene
        .get(member_id)
        .map(|bubble| bubble.delete_prompt.clone())
}
