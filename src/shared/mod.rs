//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod bubble_scene;
pub mod options;

pub use bubble_scene::{BubbleScene, BubbleView};
pub use options::AppOptions;
pub use options::{CANVAS_MARGIN, GRID_BASE_OFFSET};
