//! UI-Komponenten: Top-Bar, Formular, Canvas, Dialoge, Status.

pub mod canvas;
pub mod dialogs;
/// Formular zum Hinzufügen von Mitgliedern
///
/// Texteingaben schreiben direkt in `AppState::form`; Aktionen laufen
/// wie überall als AppIntents.
pub mod member_form;
mod photo_cache;
pub mod status;
pub mod top_bar;

pub use canvas::CanvasView;
pub use dialogs::{handle_photo_dialog, show_delete_confirm, show_notification};
pub use member_form::render_member_form;
pub use photo_cache::PhotoCache;
pub use status::render_status_bar;
pub use top_bar::render_top_bar;

/// Wandelt eine RGBA-Farbe aus den Optionen in eine egui-Farbe.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}
