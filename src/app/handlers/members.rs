//! Handler für Laden, Anlegen und Löschen von Mitgliedern.

use crate::app::state::{LoadStatus, PendingDelete};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MemberId;
use crate::gateway::MemberStore;

/// Lädt alle Mitglieder des angemeldeten Owners und ersetzt Liste und Szene.
///
/// Bei Fehlern bleiben Liste und Szene unverändert.
pub async fn reload<S: MemberStore>(state: &mut AppState, store: &S) {
    let Some(owner) = state.session.as_ref().map(|s| s.uid.clone()) else {
        log::warn!("Reload ignoriert: nicht angemeldet");
        return;
    };

    state.canvas.load_status = LoadStatus::Loading;
    match store.query_by_owner(&owner).await {
        Ok(records) => use_cases::members::replace_members(state, records),
        Err(e) => {
            log::error!("Error loading family tree: {}", e);
            state.canvas.load_status = LoadStatus::Failed(e.to_string());
        }
    }
}

/// Legt ein Mitglied aus dem Formular an und lädt danach neu.
pub async fn create<S: MemberStore>(state: &mut AppState, store: &S) {
    let Some(input) = state.form.validated() else {
        state.ui.notify("Please fill in required fields");
        return;
    };
    let Some(owner) = state.session.as_ref().map(|s| s.uid.clone()) else {
        state.ui.notify("Please sign in first");
        return;
    };

    let new_member =
        use_cases::members::plan_new_member(state, owner, input, chrono::Utc::now());
    let name = new_member.name.clone();

    match store.create(new_member).await {
        Ok(id) => {
            log::info!("Mitglied {} angelegt ({})", name, id);
            state.form.reset();
            state.photo.clear_selected_photo();
            reload(state, store).await;
        }
        Err(e) => {
            log::error!("Error adding member: {}", e);
            state.ui.notify(format!("Failed to add member: {e}"));
        }
    }
}

/// Öffnet die Löschen-Rückfrage für eine angezeigte Bubble.
pub fn request_delete(state: &mut AppState, member_id: MemberId) {
    let Some(prompt) = use_cases::members::delete_prompt(state, &member_id) else {
        log::warn!("Löschen ignoriert: Bubble {} nicht vorhanden", member_id);
        return;
    };
    state.ui.pending_delete = Some(PendingDelete { member_id, prompt });
}

/// Schließt die Rückfrage ohne Änderung.
pub fn cancel_delete(state: &mut AppState) {
    state.ui.pending_delete = None;
}

/// Löscht das Mitglied der offenen Rückfrage und lädt danach neu.
pub async fn delete_pending<S: MemberStore>(state: &mut AppState, store: &S) {
    let Some(pending) = state.ui.pending_delete.take() else {
        log::debug!("Keine offene Löschen-Rückfrage");
        return;
    };

    match store.delete(&pending.member_id).await {
        Ok(()) => {
            log::info!("Mitglied {} gelöscht", pending.member_id);
            reload(state, store).await;
        }
        Err(e) => {
            log::error!("Delete error: {}", e);
            state.ui.notify(format!("Failed to delete member: {e}"));
        }
    }
}
