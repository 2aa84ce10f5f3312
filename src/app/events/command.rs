use crate::core::MemberId;
use crate::gateway::Identity;
use crate::photo::CameraFrame;
use std::sync::Arc;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Canvas-Größe setzen
    SetCanvasSize { size: glam::Vec2 },

    /// Anmeldung über das Auth-Gateway starten
    SignIn,
    /// Abmeldung über das Auth-Gateway starten
    SignOut,
    /// Anmeldestatus übernehmen
    ApplySession { identity: Option<Identity> },
    /// Mitgliederliste des Owners komplett neu laden
    ReloadMembers,

    /// Mitglied aus dem Formular anlegen
    CreateMember,
    /// Foto-Dateidialog anfordern
    RequestPhotoFileDialog,
    /// Foto aus Datei übernehmen
    SelectPhotoFromFile { path: String },
    /// Kamera-Frame als Foto übernehmen
    SelectPhotoFromFrame { frame: Arc<CameraFrame> },
    /// Foto-Auswahl verwerfen
    ClearSelectedPhoto,

    /// Löschen-Rückfrage öffnen
    OpenDeleteConfirm { member_id: MemberId },
    /// Mitglied der offenen Rückfrage löschen
    DeletePendingMember,
    /// Löschen-Rückfrage schließen
    CloseDeleteConfirm,

    /// Drag-Lifecycle Start
    BeginDrag {
        member_id: MemberId,
        pointer: glam::Vec2,
    },
    /// Drag-Lifecycle Update
    UpdateDrag { pointer: glam::Vec2 },
    /// Drag-Lifecycle Ende (Position persistieren)
    EndDrag,

    /// Blockierende Meldung anzeigen
    ShowNotification { message: String },
    /// Aktuelle Meldung schließen
    DismissNotification,
    /// Anwendung beenden
    RequestExit,
}
