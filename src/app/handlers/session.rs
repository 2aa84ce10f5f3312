//! Handler für An- und Abmeldung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::gateway::{AuthGateway, Identity};

/// Startet die Anmeldung. Der neue Status kommt über den Auth-Listener.
pub async fn sign_in<A: AuthGateway>(state: &mut AppState, auth: &A) {
    match auth.sign_in().await {
        Ok(identity) => log::debug!("Anmeldung abgeschlossen: {}", identity.uid),
        Err(e) if !e.is_user_visible() => log::debug!("Anmeldung abgebrochen"),
        Err(e) => {
            log::error!("Login error: {}", e);
            state.ui.notify(format!("Login failed: {e}"));
        }
    }
}

/// Startet die Abmeldung.
pub async fn sign_out<A: AuthGateway>(state: &mut AppState, auth: &A) {
    if let Err(e) = auth.sign_out().await {
        log::error!("Logout error: {}", e);
        state.ui.notify(format!("Logout failed: {e}"));
    }
}

/// Übernimmt den neuen Anmeldestatus.
///
/// Bei Abmeldung oder Owner-Wechsel werden alle owner-gebundenen Daten verworfen.
pub fn apply(state: &mut AppState, identity: Option<Identity>) {
    let previous_owner = state.session.as_ref().map(|s| &s.uid);
    let owner_changed = previous_owner != identity.as_ref().map(|i| &i.uid);
    if owner_changed {
        use_cases::members::clear_members(state);
    }

    match &identity {
        Some(identity) => log::info!("Sitzung aktiv: {}", identity.display_name),
        None => log::info!("Keine Sitzung"),
    }
    state.session = identity;
}
