//! Fluechtiger Store im Speicher (Tests, Offline-Betrieb).

use super::{MemberStore, StoreError};
use crate::core::{MemberId, MemberPatch, MemberRecord, NewMember, OwnerId};
use indexmap::IndexMap;
use std::sync::Mutex;

/// In-Memory-Implementierung von `MemberStore` mit Einfuege-Reihenfolge.
#[derive(Default)]
pub struct InMemoryStore {
    documents: Mutex<IndexMap<MemberId, MemberRecord>>,
}

impl InMemoryStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Store mit vorhandenen Datensaetzen.
    pub fn with_records(records: impl IntoIterator<Item = MemberRecord>) -> Self {
        let documents = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            documents: Mutex::new(documents),
        }
    }

    /// Anzahl aller Dokumente (ueber alle Owner).
    pub fn len(&self) -> usize {
        self.lock().map_or(0, |docs| docs.len())
    }

    /// Gibt `true` zurueck, wenn keine Dokumente vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Liest einen Datensatz direkt (ohne Owner-Filter).
    pub fn get(&self, id: &MemberId) -> Option<MemberRecord> {
        self.lock().ok()?.get(id).cloned()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, IndexMap<MemberId, MemberRecord>>, StoreError> {
        self.documents
            .lock()
            .map_err(|_| StoreError::Unavailable("In-Memory-Store vergiftet".into()))
    }
}

impl MemberStore for InMemoryStore {
    async fn create(&self, member: NewMember) -> Result<MemberId, StoreError> {
        let id = MemberId::generate();
        self.lock()?
            .insert(id.clone(), member.into_record(id.clone()));
        Ok(id)
    }

    async fn query_by_owner(&self, owner: &OwnerId) -> Result<Vec<MemberRecord>, StoreError> {
        Ok(self
            .lock()?
            .values()
            .filter(|record| &record.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn update(&self, id: &MemberId, patch: MemberPatch) -> Result<(), StoreError> {
        let mut docs = self.lock()?;
        let record = docs
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        patch.apply_to(record);
        Ok(())
    }

    async fn delete(&self, id: &MemberId) -> Result<(), StoreError> {
        self.lock()?
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}
