use crate::core::MemberId;

/// Fehler des Dokument-Stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Member {0} not found")]
    NotFound(MemberId),
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Stored document is malformed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Fehler des Anmelde-Dienstes.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Vom Benutzer abgebrochen; wird nicht gemeldet.
    #[error("Sign-in cancelled by user")]
    Cancelled,
    #[error("{0}")]
    Failed(String),
}

impl AuthError {
    /// Ob der Fehler dem Benutzer angezeigt werden soll.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, AuthError::Cancelled)
    }
}
