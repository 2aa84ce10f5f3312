use crate::app::CommandLog;
use crate::core::{CanvasBounds, MemberRecord};
use crate::gateway::Identity;
use crate::photo::PhotoCapture;
use crate::shared::AppOptions;

use super::{CanvasState, MemberForm, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Angemeldete Identitaet (None = abgemeldet)
    pub session: Option<Identity>,
    /// Mitglieder des aktuellen Owners; wird nur vom Reload ersetzt
    pub members: Vec<MemberRecord>,
    /// Canvas-State (Szene, Drag, Ladestatus)
    pub canvas: CanvasState,
    /// Eingaben des Hinzufuegen-Formulars
    pub form: MemberForm,
    /// Foto-Auswahl fuer das Formular
    pub photo: PhotoCapture,
    /// UI-State (Dialoge, Meldungen)
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: AppOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            session: None,
            members: Vec::new(),
            canvas: CanvasState::new(),
            form: MemberForm::default(),
            photo: PhotoCapture::new(options.photo_max_bytes, options.photo_jpeg_quality),
            ui: UiState::new(),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der geladenen Mitglieder zurück (für UI-Anzeige)
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Gibt zurück, ob ein Benutzer angemeldet ist.
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Canvas- und Bubble-Abmessungen fuer Drag-Clamping.
    pub fn canvas_bounds(&self) -> CanvasBounds {
        CanvasBounds::new(self.canvas.size, self.options.bubble_size())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
