//! Core-Domänentypen: Mitglieder, Grid-Platzierung, Canvas-Bounds, Drag-Lifecycle.

pub mod canvas;
pub mod drag;
pub mod layout;
/// Datenmodell der Familienmitglieder
///
/// - MemberRecord: gespeicherter Datensatz inkl. ID und Position
/// - NewMember: Datensatz vor der Anlage (ohne ID)
/// - MemberPatch: Teil-Update fuer `MemberStore::update`
pub mod member;

pub use canvas::CanvasBounds;
pub use drag::{DragGesture, DragState};
pub use layout::{grid_cell, grid_position, GridCell};
pub use member::{MemberId, MemberPatch, MemberRecord, NewMember, OwnerId, FALLBACK_POSITION};
