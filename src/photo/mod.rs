//! Foto-Erfassung: Datei-Upload oder Kamera-Frame → eingebettete Data-URL.
//!
//! Der Controller sieht nur `selected_photo()` und `clear_selected_photo()`.
//! Groessen- und Formatpruefung passieren ausschliesslich hier.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Standard-Limit fuer eingebettete Fotos (1 MiB).
pub const MAX_PHOTO_BYTES: usize = 1024 * 1024;

/// Dateiendungen, die der Foto-Dialog anbietet.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Bildformate, die als Foto uebernommen werden.
const ACCEPTED_FORMATS: &[image::ImageFormat] =
    &[image::ImageFormat::Png, image::ImageFormat::Jpeg];

/// Fehler bei der Foto-Erfassung.
#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("Photo is too large. Please choose a photo under 1MB.")]
    FileTooLarge { size: usize, limit: usize },
    #[error("Photo is too large. Try again with better lighting or closer subject.")]
    CaptureTooLarge { size: usize, limit: usize },
    #[error("Selected file is not a supported image")]
    UnsupportedFormat(#[source] image::ImageError),
    #[error("Unsupported image format ({0:?}). Please choose a PNG or JPEG photo.")]
    FormatNotAllowed(image::ImageFormat),
    #[error("Camera not supported on this device. Use \"Upload from Gallery\" instead.")]
    CameraUnsupported,
    #[error("Failed to encode photo: {0}")]
    Encode(#[source] image::ImageError),
    #[error("Photo payload is not a base64 data URL")]
    MalformedPayload,
    #[error("Failed to read photo: {0}")]
    Io(#[from] std::io::Error),
}

/// Eingebettetes Bild als `data:<mime>;base64,<daten>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoPayload(String);

impl PhotoPayload {
    /// Kodiert Rohbytes mit MIME-Typ als Data-URL.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }

    /// Uebernimmt eine bereits kodierte Data-URL ungeprueft (z.B. aus dem Store).
    pub fn from_data_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Die Data-URL als Text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Laenge des kodierten Payloads in Bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Gibt `true` zurueck, wenn der Payload leer ist.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// MIME-Typ aus dem Data-URL-Header (z.B. `image/png`).
    pub fn mime_type(&self) -> Option<&str> {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(mime, _)| mime)
    }

    /// Dekodiert die Data-URL zurueck in Bild-Rohbytes (fuer die Anzeige).
    pub fn decode_bytes(&self) -> Result<Vec<u8>, PhotoError> {
        let data = self
            .0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map(|(_, data)| data)
            .ok_or(PhotoError::MalformedPayload)?;
        STANDARD
            .decode(data)
            .map_err(|_| PhotoError::MalformedPayload)
    }
}

/// Vom Host gelieferte Kamera-Aufnahme.
pub type CameraFrame = image::RgbaImage;

/// Explizit gehaltener Auswahl-Zustand des Foto-Adapters.
#[derive(Debug, Clone)]
pub struct PhotoCapture {
    selected: Option<PhotoPayload>,
    max_bytes: usize,
    jpeg_quality: u8,
}

impl Default for PhotoCapture {
    fn default() -> Self {
        Self::new(MAX_PHOTO_BYTES, 80)
    }
}

impl PhotoCapture {
    /// Erstellt einen Adapter mit Groessenlimit und JPEG-Qualitaet fuer Kamera-Frames.
    pub fn new(max_bytes: usize, jpeg_quality: u8) -> Self {
        Self {
            selected: None,
            max_bytes,
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }

    /// Aktuell ausgewaehltes Foto.
    pub fn selected_photo(&self) -> Option<&PhotoPayload> {
        self.selected.as_ref()
    }

    /// Verwirft die Auswahl (nach Anlage oder per Entfernen-Button).
    pub fn clear_selected_photo(&mut self) {
        self.selected = None;
    }

    /// Waehlt ein Foto aus einer Datei.
    pub fn select_from_file(&mut self, path: &Path) -> Result<&PhotoPayload, PhotoError> {
        let bytes = std::fs::read(path)?;
        self.select_from_bytes(&bytes)
    }

    /// Waehlt ein Foto aus bereits gelesenen Dateibytes.
    ///
    /// Das Limit gilt fuer die Dateigroesse, nicht fuer die Base64-Laenge.
    pub fn select_from_bytes(&mut self, bytes: &[u8]) -> Result<&PhotoPayload, PhotoError> {
        if bytes.len() > self.max_bytes {
            return Err(PhotoError::FileTooLarge {
                size: bytes.len(),
                limit: self.max_bytes,
            });
        }
        let format = image::guess_format(bytes).map_err(PhotoError::UnsupportedFormat)?;
        if !ACCEPTED_FORMATS.contains(&format) {
            return Err(PhotoError::FormatNotAllowed(format));
        }
        let payload = PhotoPayload::from_bytes(format.to_mime_type(), bytes);
        log::info!("Foto ausgewaehlt ({} Bytes, {})", bytes.len(), format.to_mime_type());
        let selected: &PhotoPayload = self.selected.insert(payload);
        Ok(selected)
    }

    /// Kodiert einen Kamera-Frame als JPEG und uebernimmt ihn als Auswahl.
    pub fn select_from_frame(&mut self, frame: &CameraFrame) -> Result<&PhotoPayload, PhotoError> {
        let rgb = image::DynamicImage::ImageRgba8(frame.clone()).to_rgb8();
        let mut jpeg = Vec::new();
        let mut encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, self.jpeg_quality);
        encoder.encode_image(&rgb).map_err(PhotoError::Encode)?;

        if jpeg.len() > self.max_bytes {
            return Err(PhotoError::CaptureTooLarge {
                size: jpeg.len(),
                limit: self.max_bytes,
            });
        }
        let payload = PhotoPayload::from_bytes("image/jpeg", &jpeg);
        log::info!("Kamera-Foto uebernommen ({} Bytes JPEG)", jpeg.len());
        let selected: &PhotoPayload = self.selected.insert(payload);
        Ok(selected)
    }
}
