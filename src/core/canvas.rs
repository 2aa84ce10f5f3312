//! Canvas-Abmessungen und Clamping von Bubble-Positionen.

/// Abmessungen der Canvas und einer Bubble in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    /// Groesse der Canvas
    pub canvas_size: glam::Vec2,
    /// Groesse einer Bubble
    pub bubble_size: glam::Vec2,
}

impl CanvasBounds {
    /// Erstellt neue Bounds.
    pub fn new(canvas_size: glam::Vec2, bubble_size: glam::Vec2) -> Self {
        Self {
            canvas_size,
            bubble_size,
        }
    }

    /// Groesste erlaubte Top-Left-Position (kann negativ sein, wenn die Canvas
    /// kleiner als eine Bubble ist).
    pub fn max_position(&self) -> glam::Vec2 {
        self.canvas_size - self.bubble_size
    }

    /// Klemmt eine Position auf `[0, canvas - bubble]` pro Achse.
    ///
    /// Erst gegen das Maximum, dann gegen 0: bei zu kleiner Canvas gewinnt 0.
    pub fn clamp(&self, position: glam::Vec2) -> glam::Vec2 {
        position.min(self.max_position()).max(glam::Vec2::ZERO)
    }

    /// Prueft, ob eine Position innerhalb der erlaubten Flaeche liegt.
    pub fn contains(&self, position: glam::Vec2) -> bool {
        let max = self.max_position().max(glam::Vec2::ZERO);
        position.x >= 0.0 && position.y >= 0.0 && position.x <= max.x && position.y <= max.y
    }

    /// Zeichenflaeche fuer die Grid-Platzierung: Canvas abzueglich Rand.
    pub fn drawable(&self, margin: f32) -> glam::Vec2 {
        self.canvas_size - glam::Vec2::splat(margin)
    }
}
