//! Externe Kollaborateure: Dokument-Store und Anmeldung.
//!
//! Der Controller kennt nur die Vertraege `MemberStore` und `AuthGateway`.
//! Alle Aufrufe sind asynchron; Timeouts und Retries liegen beim Gateway.

mod error;
pub mod json_store;
pub mod local_auth;
pub mod memory_store;

pub use error::{AuthError, StoreError};
pub use json_store::JsonFileStore;
pub use local_auth::LocalAuthGateway;
pub use memory_store::InMemoryStore;

use crate::core::{MemberId, MemberPatch, MemberRecord, NewMember, OwnerId};

/// Angemeldete Identitaet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Owner-ID fuer alle Store-Abfragen
    pub uid: OwnerId,
    /// Anzeigename
    pub display_name: String,
    /// Optionales Profilbild (URL oder Data-URL)
    pub photo_url: Option<String>,
}

/// Listener fuer Anmeldestatus-Aenderungen (`None` = abgemeldet).
pub type AuthListener = Box<dyn Fn(Option<Identity>) + Send + Sync>;

/// Entfernter Dokument-Store fuer Mitglieder, nach Owner gefiltert.
#[allow(async_fn_in_trait)]
pub trait MemberStore {
    /// Legt einen Datensatz an und liefert die vergebene ID.
    async fn create(&self, member: NewMember) -> Result<MemberId, StoreError>;

    /// Liefert alle Datensaetze eines Owners.
    async fn query_by_owner(&self, owner: &OwnerId) -> Result<Vec<MemberRecord>, StoreError>;

    /// Aktualisiert einzelne Felder eines Datensatzes.
    async fn update(&self, id: &MemberId, patch: MemberPatch) -> Result<(), StoreError>;

    /// Loescht einen Datensatz.
    async fn delete(&self, id: &MemberId) -> Result<(), StoreError>;
}

/// Anmelde-Dienst mit Statusbenachrichtigung.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    /// Meldet einen Benutzer an. Listener werden mit der Identitaet benachrichtigt.
    async fn sign_in(&self) -> Result<Identity, AuthError>;

    /// Meldet den Benutzer ab. Listener werden mit `None` benachrichtigt.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Registriert einen Listener fuer Statusaenderungen.
    fn on_state_change(&self, listener: AuthListener);

    /// Aktuell angemeldete Identitaet.
    fn current_identity(&self) -> Option<Identity>;
}
