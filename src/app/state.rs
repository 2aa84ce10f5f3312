//! Application State: zentrale Datenhaltung.
//!
//! Sitzung, Mitgliederliste, Canvas, Formular und Foto-Auswahl gehoeren
//! explizit dem `AppState`; Handler bekommen ihn per Referenz.

mod app_state;
mod canvas;
mod form;
mod ui;

pub use app_state::AppState;
pub use canvas::{CanvasState, LoadStatus};
pub use form::{MemberForm, MemberInput};
pub use ui::{PendingDelete, UiState};
