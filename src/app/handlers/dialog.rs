//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Übernimmt die von der UI gemeldete Canvas-Größe.
pub fn set_canvas_size(state: &mut AppState, size: glam::Vec2) {
    state.canvas.size = size.max(glam::Vec2::ZERO);
}

/// Zeigt eine blockierende Meldung an.
pub fn show_notification(state: &mut AppState, message: String) {
    state.ui.notify(message);
}

/// Schließt die aktuelle Meldung.
pub fn dismiss_notification(state: &mut AppState) {
    state.ui.dismiss_notification();
}
