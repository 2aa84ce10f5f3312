//! Datenmodell eines Familienmitglieds.

use crate::photo::PhotoPayload;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback-Position, wenn ein Dokument keine gespeicherte Position hat.
pub const FALLBACK_POSITION: glam::Vec2 = glam::Vec2::new(100.0, 100.0);

/// Opake Dokument-ID, vom Store bei der Anlage vergeben.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Erzeugt eine ID aus einem beliebigen String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Vergibt eine neue, zufaellige ID (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Liefert die ID als `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier des angemeldeten Benutzers, dem ein Datensatz gehoert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Erzeugt eine Owner-ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Liefert die ID als `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ein gespeichertes Familienmitglied.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRecord {
    /// Vom Store vergebene ID (stabil ueber die Lebensdauer)
    pub id: MemberId,
    /// Besitzer des Datensatzes (unveraenderlich)
    pub owner_id: OwnerId,
    /// Name (Pflichtfeld)
    pub name: String,
    /// Verwandtschaftsbeziehung (Pflichtfeld)
    pub relation: String,
    /// Geburtsjahr als Freitext
    pub birth_year: Option<String>,
    /// Notizen
    pub notes: Option<String>,
    /// Eingebettetes Foto
    pub photo: Option<PhotoPayload>,
    /// Top-Left-Position der Bubble in Canvas-Pixeln
    pub position: glam::Vec2,
    /// Anlagezeitpunkt
    pub created_at: DateTime<Utc>,
}

/// Datensatz ohne ID, wie er an `MemberStore::create` uebergeben wird.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub owner_id: OwnerId,
    pub name: String,
    pub relation: String,
    pub birth_year: Option<String>,
    pub notes: Option<String>,
    pub photo: Option<PhotoPayload>,
    pub position: glam::Vec2,
    pub created_at: DateTime<Utc>,
}

impl NewMember {
    /// Vervollstaendigt den Datensatz mit der vom Store vergebenen ID.
    pub fn into_record(self, id: MemberId) -> MemberRecord {
        MemberRecord {
            id,
            owner_id: self.owner_id,
            name: self.name,
            relation: self.relation,
            birth_year: self.birth_year,
            notes: self.notes,
            photo: self.photo,
            position: self.position,
            created_at: self.created_at,
        }
    }
}

/// Teil-Update eines Datensatzes. `None` = Feld bleibt unveraendert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub relation: Option<String>,
    pub birth_year: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub position: Option<glam::Vec2>,
}

impl MemberPatch {
    /// Patch, der nur die Position setzt (Drag-Release).
    pub fn position(position: glam::Vec2) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Wendet den Patch auf einen Datensatz an.
    /// `id`, `owner_id` und `created_at` sind nicht patchbar.
    pub fn apply_to(&self, record: &mut MemberRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(relation) = &self.relation {
            record.relation = relation.clone();
        }
        if let Some(birth_year) = &self.birth_year {
            record.birth_year = birth_year.clone();
        }
        if let Some(notes) = &self.notes {
            record.notes = notes.clone();
        }
        if let Some(position) = self.position {
            record.position = position;
        }
    }
}
