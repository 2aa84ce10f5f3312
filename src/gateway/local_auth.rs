//! Lokale Anmeldung mit einem konfigurierten Profil.

use super::{AuthError, AuthGateway, AuthListener, Identity};
use crate::core::OwnerId;
use std::sync::{Mutex, RwLock};

/// Meldet das konfigurierte Profil an, ohne externen Identity-Provider.
pub struct LocalAuthGateway {
    profile: Option<Identity>,
    current: RwLock<Option<Identity>>,
    listeners: Mutex<Vec<AuthListener>>,
}

impl LocalAuthGateway {
    /// Erstellt das Gateway fuer ein festes Profil.
    pub fn new(uid: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::with_profile(Some(Identity {
            uid: OwnerId::new(uid),
            display_name: display_name.into(),
            photo_url: None,
        }))
    }

    /// Erstellt das Gateway; ohne Profil schlaegt jede Anmeldung fehl.
    pub fn with_profile(profile: Option<Identity>) -> Self {
        Self {
            profile,
            current: RwLock::new(None),
            listeners: Mutex::new(Vec::new()),
        }
    }

    fn set_current(&self, identity: Option<Identity>) -> Result<(), AuthError> {
        let mut current = self
            .current
            .write()
            .map_err(|_| AuthError::Failed("Auth-Status vergiftet".into()))?;
        *current = identity.clone();
        drop(current);

        match self.listeners.lock() {
            Ok(listeners) => {
                for listener in listeners.iter() {
                    listener(identity.clone());
                }
            }
            Err(_) => log::error!("Auth-Listener-Liste vergiftet, Benachrichtigung entfaellt"),
        }
        Ok(())
    }
}

impl AuthGateway for LocalAuthGateway {
    async fn sign_in(&self) -> Result<Identity, AuthError> {
        let identity = self
            .profile
            .clone()
            .ok_or_else(|| AuthError::Failed("No local profile configured".into()))?;
        self.set_current(Some(identity.clone()))?;
        log::info!("Angemeldet als {}", identity.display_name);
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.set_current(None)?;
        log::info!("Abgemeldet");
        Ok(())
    }

    fn on_state_change(&self, listener: AuthListener) {
        // Neue Listener erhalten sofort den aktuellen Status
        listener(self.current_identity());
        match self.listeners.lock() {
            Ok(mut listeners) => listeners.push(listener),
            Err(_) => log::error!("Auth-Listener-Liste vergiftet, Listener verworfen"),
        }
    }

    fn current_identity(&self) -> Option<Identity> {
        self.current.read().ok().and_then(|c| c.clone())
    }
}
