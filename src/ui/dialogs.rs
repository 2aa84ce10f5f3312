//! Datei-Dialog und modale Fenster.

use crate::app::{AppIntent, UiState};
use crate::photo::ACCEPTED_EXTENSIONS;

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet den ausstehenden Foto-Dateidialog und gibt AppIntents zurück.
pub fn handle_photo_dialog(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_photo_file_dialog {
        ui_state.show_photo_file_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", ACCEPTED_EXTENSIONS)
            .pick_file()
        {
            events.push(AppIntent::PhotoFileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}

/// Zeigt die Löschen-Rückfrage als modales Fenster.
pub fn show_delete_confirm(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(pending) = &ui_state.pending_delete else {
        return events;
    };

    egui::Window::new("Delete member")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(&pending.prompt);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        events.push(AppIntent::DeleteConfirmed);
                    }
                    if ui.button("Cancel").clicked() {
                        events.push(AppIntent::DeleteCancelled);
                    }
                });
            });
        });

    events
}

/// Zeigt die älteste wartende Meldung (Alert-Ersatz).
pub fn show_notification(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = ui_state.current_notification() else {
        return events;
    };

    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(message);
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    events.push(AppIntent::NotificationDismissed);
                }
            });
        });

    events
}
