//! Zentrale Konfiguration fuer die Stammbaum-Canvas.
//!
//! `AppOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Layout ──────────────────────────────────────────────────────────

/// Rand (px), der fuer die Grid-Platzierung von der Canvas abgezogen wird.
pub const CANVAS_MARGIN: f32 = 150.0;
/// Basis-Offset (px) der ersten Grid-Zelle.
pub const GRID_BASE_OFFSET: f32 = 100.0;
/// Standard-Bubble-Groesse (px).
pub const BUBBLE_SIZE: [f32; 2] = [120.0, 150.0];

// ── Fotos ───────────────────────────────────────────────────────────

/// Maximale Foto-Groesse in Bytes.
pub const PHOTO_MAX_BYTES: usize = 1024 * 1024;
/// JPEG-Qualitaet fuer Kamera-Aufnahmen.
pub const PHOTO_JPEG_QUALITY: u8 = 80;

// ── Beziehungen ─────────────────────────────────────────────────────

/// Auswahl im Formular.
pub const RELATIONS: [&str; 9] = [
    "Parent",
    "Grandparent",
    "Sibling",
    "Spouse/Partner",
    "Child",
    "Grandchild",
    "Aunt/Uncle",
    "Cousin",
    "Other",
];

/// Farbe einer Beziehungsklasse (RGBA).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelationColor {
    /// Stil-Schluessel, z.B. `spouse-partner`
    pub key: String,
    /// Fuellfarbe (RGBA)
    pub color: [f32; 4],
}

/// Lokales Profil fuer die Anmeldung.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileOptions {
    /// Owner-ID der Datensaetze
    pub uid: String,
    /// Anzeigename in der Kopfzeile
    pub display_name: String,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            uid: "local-user".into(),
            display_name: std::env::var("USER").unwrap_or_else(|_| "Family Historian".into()),
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit aenderbaren Optionen.
/// Wird als `family_tree_canvas.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppOptions {
    // ── Layout ──────────────────────────────────────────────────
    /// Rand fuer die Grid-Platzierung
    pub canvas_margin: f32,
    /// Basis-Offset der Grid-Platzierung
    pub grid_base_offset: f32,
    /// Bubble-Groesse (Breite, Hoehe)
    pub bubble_size: [f32; 2],

    // ── Fotos ───────────────────────────────────────────────────
    /// Foto-Limit in Bytes
    pub photo_max_bytes: usize,
    /// JPEG-Qualitaet fuer Kamera-Frames (1–100)
    pub photo_jpeg_quality: u8,

    // ── Daten & Profil ──────────────────────────────────────────
    /// Pfad der JSON-Datendatei (relativ zur Binary, falls nicht absolut)
    pub data_file: String,
    /// Profil fuer die lokale Anmeldung
    pub profile: ProfileOptions,

    // ── Darstellung ─────────────────────────────────────────────
    /// Auswahl im Beziehungs-Dropdown
    pub relations: Vec<String>,
    /// Farben pro Beziehungsklasse
    pub relation_colors: Vec<RelationColor>,
    /// Farbe fuer unbekannte Beziehungsklassen
    pub bubble_color_default: [f32; 4],
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            canvas_margin: CANVAS_MARGIN,
            grid_base_offset: GRID_BASE_OFFSET,
            bubble_size: BUBBLE_SIZE,
            photo_max_bytes: PHOTO_MAX_BYTES,
            photo_jpeg_quality: PHOTO_JPEG_QUALITY,
            data_file: "family_members.json".into(),
            profile: ProfileOptions::default(),
            relations: RELATIONS.iter().map(|r| r.to_string()).collect(),
            relation_colors: default_relation_colors(),
            bubble_color_default: [0.40, 0.49, 0.92, 1.0],
        }
    }
}

fn default_relation_colors() -> Vec<RelationColor> {
    let entry = |key: &str, color: [f32; 4]| RelationColor {
        key: key.into(),
        color,
    };
    vec![
        entry("parent", [0.40, 0.49, 0.92, 1.0]),
        entry("grandparent", [0.46, 0.29, 0.64, 1.0]),
        entry("sibling", [0.94, 0.58, 0.98, 1.0]),
        entry("spouse-partner", [0.96, 0.34, 0.42, 1.0]),
        entry("child", [0.31, 0.67, 0.99, 1.0]),
        entry("grandchild", [0.26, 0.91, 0.48, 1.0]),
        entry("aunt-uncle", [0.98, 0.44, 0.60, 1.0]),
        entry("cousin", [0.19, 0.81, 0.82, 1.0]),
    ]
}

impl AppOptions {
    /// Laedt Optionen aus TOML-Datei. Fallback auf Default bei Fehler.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        Self::binary_dir().join("family_tree_canvas.toml")
    }

    /// Absoluter Pfad der Datendatei.
    pub fn data_path(&self) -> std::path::PathBuf {
        let path = std::path::Path::new(&self.data_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            Self::binary_dir().join(path)
        }
    }

    fn binary_dir() -> std::path::PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(std::path::Path::to_path_buf))
            .unwrap_or_else(|| std::path::PathBuf::from("."))
    }

    /// Bubble-Groesse als Vektor.
    pub fn bubble_size(&self) -> glam::Vec2 {
        glam::Vec2::from(self.bubble_size)
    }

    /// Fuellfarbe fuer einen Beziehungs-Stilschluessel.
    pub fn relation_color(&self, relation_key: &str) -> [f32; 4] {
        self.relation_colors
            .iter()
            .find(|entry| entry.key == relation_key)
            .map_or(self.bubble_color_default, |entry| entry.color)
    }
}
