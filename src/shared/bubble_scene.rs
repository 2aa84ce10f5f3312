//! Bubble-Szene als expliziter Uebergabevertrag zwischen App und UI.
//!
//! Entspricht dem sichtbaren Canvas-Inhalt: eine Bubble pro Mitglied. Die
//! Szene wird bei jedem Reload komplett ersetzt; ein Drag veraendert nur die
//! Position der betroffenen Bubble hier, nicht die Mitgliederliste.

use crate::core::MemberId;
use crate::photo::PhotoPayload;

/// Beschreibung einer gerenderten Bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleView {
    /// ID des dargestellten Mitglieds
    pub member_id: MemberId,
    /// Name
    pub name: String,
    /// Beziehung im Klartext
    pub relation: String,
    /// Stil-Schluessel der Beziehung (z.B. `spouse-partner`)
    pub relation_key: String,
    /// Geburtsjahr-Beschriftung ("Born 1950")
    pub birth_label: Option<String>,
    /// Foto
    pub photo: Option<PhotoPayload>,
    /// Sichtbare Top-Left-Position
    pub position: glam::Vec2,
    /// Im Vordergrund (waehrend Drag)
    pub elevated: bool,
    /// Rueckfrage-Text fuer den Loeschen-Dialog
    pub delete_prompt: String,
}

/// Read-only Sicht auf alle Bubbles der Canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BubbleScene {
    bubbles: Vec<BubbleView>,
}

impl BubbleScene {
    /// Erstellt eine Szene aus fertigen Bubbles.
    pub fn new(bubbles: Vec<BubbleView>) -> Self {
        Self { bubbles }
    }

    /// Alle Bubbles in Listenreihenfolge.
    pub fn bubbles(&self) -> &[BubbleView] {
        &self.bubbles
    }

    /// Bubbles in Zeichenreihenfolge: erhobene zuletzt (oben).
    pub fn paint_order(&self) -> impl Iterator<Item = &BubbleView> {
        self.bubbles
            .iter()
            .filter(|b| !b.elevated)
            .chain(self.bubbles.iter().filter(|b| b.elevated))
    }

    /// Bubble zu einer Mitglieds-ID.
    pub fn get(&self, id: &MemberId) -> Option<&BubbleView> {
        self.bubbles.iter().find(|b| &b.member_id == id)
    }

    /// Veraenderbare Bubble zu einer Mitglieds-ID.
    pub fn get_mut(&mut self, id: &MemberId) -> Option<&mut BubbleView> {
        self.bubbles.iter_mut().find(|b| &b.member_id == id)
    }

    /// Anzahl der Bubbles.
    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    /// Gibt `true` zurueck, wenn keine Bubble angezeigt wird.
    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    /// Entfernt alle Bubbles.
    pub fn clear(&mut self) {
        self.bubbles.clear();
    }
}
