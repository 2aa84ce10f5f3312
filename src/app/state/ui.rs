use crate::core::MemberId;
use std::collections::VecDeque;

/// Offene Loeschen-Rueckfrage
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    /// Zu loeschendes Mitglied
    pub member_id: MemberId,
    /// Rueckfrage-Text ("Delete <name>?")
    pub prompt: String,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Blockierende Meldungen, aelteste zuerst
    notifications: VecDeque<String>,
    /// Offene Loeschen-Rueckfrage
    pub pending_delete: Option<PendingDelete>,
    /// Ob der Foto-Dateidialog geoeffnet werden soll
    pub show_photo_file_dialog: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reiht eine blockierende Meldung ein.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notifications.push_back(message.into());
    }

    /// Aktuell angezeigte Meldung.
    pub fn current_notification(&self) -> Option<&str> {
        self.notifications.front().map(String::as_str)
    }

    /// Schliesst die aktuelle Meldung.
    pub fn dismiss_notification(&mut self) {
        self.notifications.pop_front();
    }

    /// Anzahl wartender Meldungen.
    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }
}
