//! Dokument-Store als JSON-Datei.
//!
//! Schema entspricht der Collection `familyMembers`:
//! `userId, name, relation, birthYear, notes, photoURL, posX, posY, createdAt`.
//! Jede Mutation schreibt die komplette Datei (temp + rename); schlaegt das
//! Schreiben fehl, bleibt der vorherige Zustand erhalten.
//! Eine defekte Datei wird beim Start nach `<name>.bak` verschoben.

use super::{MemberStore, StoreError};
use crate::core::{MemberId, MemberPatch, MemberRecord, NewMember, OwnerId, FALLBACK_POSITION};
use crate::photo::PhotoPayload;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

type Documents = IndexMap<MemberId, MemberRecord>;

/// Datei-Inhalt: eine einzige Collection.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreFile {
    #[serde(default)]
    family_members: Vec<MemberDocument>,
}

/// Ein Dokument im Persistenz-Schema.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberDocument {
    id: MemberId,
    user_id: OwnerId,
    name: String,
    relation: String,
    #[serde(default)]
    birth_year: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(rename = "photoURL", default)]
    photo_url: Option<PhotoPayload>,
    #[serde(default)]
    pos_x: Option<f32>,
    #[serde(default)]
    pos_y: Option<f32>,
    created_at: DateTime<Utc>,
}

impl From<MemberDocument> for MemberRecord {
    fn from(doc: MemberDocument) -> Self {
        MemberRecord {
            id: doc.id,
            owner_id: doc.user_id,
            name: doc.name,
            relation: doc.relation,
            birth_year: doc.birth_year,
            notes: doc.notes,
            photo: doc.photo_url,
            position: glam::Vec2::new(
                doc.pos_x.unwrap_or(FALLBACK_POSITION.x),
                doc.pos_y.unwrap_or(FALLBACK_POSITION.y),
            ),
            created_at: doc.created_at,
        }
    }
}

impl From<&MemberRecord> for MemberDocument {
    fn from(record: &MemberRecord) -> Self {
        MemberDocument {
            id: record.id.clone(),
            user_id: record.owner_id.clone(),
            name: record.name.clone(),
            relation: record.relation.clone(),
            birth_year: record.birth_year.clone(),
            notes: record.notes.clone(),
            photo_url: record.photo.clone(),
            pos_x: Some(record.position.x),
            pos_y: Some(record.position.y),
            created_at: record.created_at,
        }
    }
}

/// `MemberStore` auf Basis einer lokalen JSON-Datei.
pub struct JsonFileStore {
    path: PathBuf,
    documents: Mutex<Documents>,
    /// `false`, wenn eine defekte Datei nicht gesichert werden konnte.
    writable: bool,
}

impl JsonFileStore {
    /// Oeffnet die Datei; fehlt sie, startet der Store leer.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let documents = match std::fs::read_to_string(&path) {
            Ok(content) => {
                let file: StoreFile = serde_json::from_str(&content)?;
                let docs: Documents = file
                    .family_members
                    .into_iter()
                    .map(|doc| (doc.id.clone(), MemberRecord::from(doc)))
                    .collect();
                log::info!("{} Dokumente geladen aus: {}", docs.len(), path.display());
                docs
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Keine Datendatei gefunden, starte leer: {}", path.display());
                Documents::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            documents: Mutex::new(documents),
            writable: true,
        })
    }

    /// Wie [`open`](Self::open), bricht aber bei einer defekten Datei nicht ab.
    ///
    /// Die Datei wird nach `<name>.bak` verschoben und der Store startet leer.
    /// Scheitert die Sicherung, bleibt der Store leer und lehnt Schreibzugriffe
    /// ab, damit die Originaldatei nicht ueberschrieben wird. Der zweite Wert
    /// enthaelt den Ladefehler zur Anzeige.
    pub fn open_or_recover(path: impl Into<PathBuf>) -> (Self, Option<StoreError>) {
        let path = path.into();
        let error = match Self::open(path.clone()) {
            Ok(store) => return (store, None),
            Err(e) => e,
        };
        log::error!("Datendatei nicht ladbar: {}: {}", path.display(), error);

        let backup = backup_path(&path);
        let writable = match std::fs::rename(&path, &backup) {
            Ok(()) => {
                log::warn!("Defekte Datendatei gesichert als: {}", backup.display());
                true
            }
            Err(e) => {
                log::error!(
                    "Sicherung nach {} fehlgeschlagen, Store ist schreibgeschuetzt: {}",
                    backup.display(),
                    e
                );
                false
            }
        };

        let store = Self {
            path,
            documents: Mutex::new(Documents::new()),
            writable,
        };
        (store, Some(error))
    }

    /// Pfad der Datendatei.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, Documents>, StoreError> {
        self.documents
            .lock()
            .map_err(|_| StoreError::Unavailable("JSON-Store vergiftet".into()))
    }

    /// Fuehrt eine Mutation auf einer Kopie aus und uebernimmt sie erst nach
    /// erfolgreichem Schreiben.
    fn mutate<T>(
        &self,
        change: impl FnOnce(&mut Documents) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        if !self.writable {
            return Err(StoreError::Unavailable(
                "data file could not be loaded, changes are disabled".into(),
            ));
        }
        let mut docs = self.lock()?;
        let mut next = docs.clone();
        let result = change(&mut next)?;
        write_file(&self.path, &next)?;
        *docs = next;
        Ok(result)
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    path.with_file_name(name)
}

fn write_file(path: &Path, docs: &Documents) -> Result<(), StoreError> {
    let file = StoreFile {
        family_members: docs.values().map(MemberDocument::from).collect(),
    };
    let content = serde_json::to_string_pretty(&file)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, content)?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        if let Err(cleanup) = std::fs::remove_file(&tmp) {
            log::warn!("Temp-Datei {} bleibt liegen: {}", tmp.display(), cleanup);
        }
        return Err(e.into());
    }
    Ok(())
}

impl MemberStore for JsonFileStore {
    async fn create(&self, member: NewMember) -> Result<MemberId, StoreError> {
        let id = MemberId::generate();
        self.mutate(|docs| {
            docs.insert(id.clone(), member.into_record(id.clone()));
            Ok(())
        })?;
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
        self.mutate(|docs| {
            let record = docs
                .get_mut(id)
                .ok_or_else(|| StoreError::NotFound(id.clone()))?;
            patch.apply_to(record);
            Ok(())
        })
    }

    async fn delete(&self, id: &MemberId) -> Result<(), StoreError> {
        self.mutate(|docs| {
            docs.shift_remove(id)
                .map(|_| ())
                .ok_or_else(|| StoreError::NotFound(id.clone()))
        })
    }
}
