//! Dekodierte Foto-Bytes fuer egui-Image-Quellen.

use crate::photo::PhotoPayload;
use egui::load::Bytes;
use std::collections::HashMap;

/// Cache: Data-URL → (URI, Rohbytes). Vermeidet Base64-Dekodierung pro Frame.
#[derive(Default)]
pub struct PhotoCache {
    entries: HashMap<String, Option<(String, Bytes)>>,
    next_id: u64,
}

impl PhotoCache {
    /// Erstellt einen leeren Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert eine Image-Quelle fuer den Payload (None bei defekten Daten).
    pub fn source(&mut self, payload: &PhotoPayload) -> Option<egui::ImageSource<'static>> {
        if !self.entries.contains_key(payload.as_str()) {
            let entry = self.decode(payload);
            self.entries.insert(payload.as_str().to_string(), entry);
        }

        self.entries
            .get(payload.as_str())
            .and_then(Option::as_ref)
            .map(|(uri, bytes)| egui::ImageSource::Bytes {
                uri: uri.clone().into(),
                bytes: bytes.clone(),
            })
    }

    /// Entfernt Eintraege, die in `keep` nicht mehr vorkommen.
    pub fn retain<'a>(&mut self, keep: impl IntoIterator<Item = &'a PhotoPayload>) {
        let keep: std::collections::HashSet<&str> =
            keep.into_iter().map(PhotoPayload::as_str).collect();
        self.entries.retain(|key, _| keep.contains(key.as_str()));
    }

    fn decode(&mut self, payload: &PhotoPayload) -> Option<(String, Bytes)> {
        match payload.decode_bytes() {
            Ok(bytes) => {
                let ext = match payload.mime_type() {
                    Some("image/jpeg") => "jpg",
                    _ => "png",
                };
                self.next_id += 1;
                let uri = format!("bytes://member-photo/{}.{ext}", self.next_id);
                Some((uri, Bytes::from(bytes)))
            }
            Err(e) => {
                log::warn!("Foto nicht darstellbar: {}", e);
                None
            }
        }
    }
}
