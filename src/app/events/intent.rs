use crate::core::MemberId;
use crate::gateway::Identity;
use crate::photo::CameraFrame;
use std::sync::Arc;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Canvas-Größe hat sich geändert
    CanvasResized { size: glam::Vec2 },

    /// Anmelden-Button geklickt
    SignInRequested,
    /// Abmelden-Button geklickt
    SignOutRequested,
    /// Auth-Gateway meldet neuen Anmeldestatus
    AuthStateChanged { identity: Option<Identity> },
    /// Mitgliederliste manuell neu laden
    ReloadRequested,

    /// Formular abgeschickt
    AddMemberRequested,
    /// Foto aus Datei wählen (zeigt Dateidialog)
    PhotoUploadRequested,
    /// Foto-Datei wurde im Dialog ausgewählt
    PhotoFileSelected { path: String },
    /// Kamera hat einen Frame geliefert
    CameraFrameCaptured { frame: Arc<CameraFrame> },
    /// Kamera angefordert, aber auf diesem Host nicht verfügbar
    CameraUnavailable,
    /// Foto-Vorschau entfernt
    PhotoRemoved,

    /// Löschen-Button einer Bubble geklickt
    DeleteMemberRequested { member_id: MemberId },
    /// Löschen-Rückfrage bestätigt
    DeleteConfirmed,
    /// Löschen-Rückfrage abgelehnt
    DeleteCancelled,

    /// Pointer-Down auf einem Bubble-Körper (Canvas-Koordinaten)
    BubblePressed {
        member_id: MemberId,
        pointer: glam::Vec2,
    },
    /// Pointer bewegt (Canvas-Koordinaten)
    PointerMoved { pointer: glam::Vec2 },
    /// Pointer losgelassen
    PointerReleased,

    /// Blockierende Meldung bestätigt
    NotificationDismissed,
    /// Anwendung beenden
    ExitRequested,
}
