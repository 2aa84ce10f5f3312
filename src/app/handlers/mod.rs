//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion. Gateway-Fehler
//! werden hier abgefangen, geloggt und als Meldung im `UiState` abgelegt.

pub mod dialog;
pub mod drag;
pub mod members;
pub mod photo;
pub mod session;
