//! Grid-Platzierung neuer Bubbles.
//!
//! Das neue Mitglied belegt die naechste Zelle eines annaehernd quadratischen
//! Grids, das fuer `existing_count + 1` Eintraege dimensioniert ist. Es gibt
//! keine Kollisionspruefung gegen bestehende Bubbles: nur die Zellen sind
//! voneinander getrennt, Ueberlappungen nach manuellem Verschieben bleiben moeglich.

/// Zelle im Platzierungs-Grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Spaltenanzahl des Grids
    pub cols: usize,
    /// Zeilenanzahl des Grids
    pub rows: usize,
    /// Zeile der neuen Zelle (0-basiert)
    pub row: usize,
    /// Spalte der neuen Zelle (0-basiert)
    pub col: usize,
}

/// Bestimmt die Zelle fuer ein neues Mitglied bei `existing_count` vorhandenen.
pub fn grid_cell(existing_count: usize) -> GridCell {
    let total = existing_count + 1;
    let cols = ceil_sqrt(total);
    GridCell {
        cols,
        rows: total.div_ceil(cols),
        row: existing_count / cols,
        col: existing_count % cols,
    }
}

/// Berechnet die Startposition eines neuen Mitglieds.
///
/// `drawable` ist die Canvas-Groesse abzueglich des Bubble-Randes. Negative
/// Werte (Canvas kleiner als der Rand) werden als 0 behandelt.
pub fn grid_position(existing_count: usize, drawable: glam::Vec2, base_offset: f32) -> glam::Vec2 {
    let cell = grid_cell(existing_count);
    let drawable = drawable.max(glam::Vec2::ZERO);

    let cell_width = drawable.x / cell.cols as f32;
    let cell_height = drawable.y / cell.rows as f32;

    glam::Vec2::new(
        base_offset + cell.col as f32 * cell_width,
        base_offset + cell.row as f32 * cell_height,
    )
}

/// Ganzzahlige Aufrundung der Quadratwurzel (`ceil(sqrt(n))`).
fn ceil_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    // Float-Rundung in beide Richtungen korrigieren
    while root * root > n {
        root -= 1;
    }
    while root * root < n {
        root += 1;
    }
    root.max(1)
}
