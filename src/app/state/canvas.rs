use crate::core::DragState;
use crate::shared::BubbleScene;

/// Standard-Canvas-Groesse bis zur ersten Layout-Meldung der UI.
const DEFAULT_CANVAS_SIZE: glam::Vec2 = glam::Vec2::new(1000.0, 700.0);

/// Ladestatus der Mitgliederliste
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Noch nicht geladen (abgemeldet)
    #[default]
    Idle,
    /// Abfrage laeuft
    Loading,
    /// Abfrage erfolgreich, keine Mitglieder
    Empty,
    /// Abfrage erfolgreich
    Loaded,
    /// Abfrage fehlgeschlagen
    Failed(String),
}

/// Sichtbarer Canvas-Zustand
#[derive(Debug, Clone)]
pub struct CanvasState {
    /// Canvas-Groesse in Pixeln
    pub size: glam::Vec2,
    /// Gerenderte Bubbles (bei jedem Reload komplett ersetzt)
    pub scene: BubbleScene,
    /// Drag-Lifecycle
    pub drag: DragState,
    /// Ladestatus
    pub load_status: LoadStatus,
}

impl CanvasState {
    /// Erstellt eine leere Canvas.
    pub fn new() -> Self {
        Self {
            size: DEFAULT_CANVAS_SIZE,
            scene: BubbleScene::default(),
            drag: DragState::Idle,
            load_status: LoadStatus::Idle,
        }
    }

    /// Entfernt alle Bubbles und bricht einen laufenden Drag ab.
    pub fn clear(&mut self) {
        self.scene.clear();
        if let Some(id) = self.drag.cancel() {
            log::debug!("Drag von {} verworfen (Canvas geleert)", id);
        }
    }
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new()
    }
}
