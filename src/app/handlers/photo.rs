//! Handler für die Foto-Auswahl des Formulars.

use crate::app::AppState;
use crate::photo::CameraFrame;

/// Öffnet den Foto-Dateidialog im nächsten Frame.
pub fn request_file_dialog(state: &mut AppState) {
    state.ui.show_photo_file_dialog = true;
}

/// Übernimmt ein Foto aus einer Datei.
pub fn select_from_file(state: &mut AppState, path: &str) {
    if let Err(e) = state.photo.select_from_file(std::path::Path::new(path)) {
        log::warn!("Foto aus {} abgelehnt: {}", path, e);
        state.ui.notify(e.to_string());
    }
}

/// Übernimmt einen Kamera-Frame als Foto.
pub fn select_from_frame(state: &mut AppState, frame: &CameraFrame) {
    if let Err(e) = state.photo.select_from_frame(frame) {
        log::warn!("Kamera-Foto abgelehnt: {}", e);
        state.ui.notify(e.to_string());
    }
}

/// Verwirft die Foto-Auswahl.
pub fn clear(state: &mut AppState) {
    state.photo.clear_selected_photo();
}
