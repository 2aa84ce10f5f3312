//! Drag-Zustandsmaschine fuer Bubbles: `Idle → Dragging → Idle`.
//!
//! Die Maschine veraendert nur die sichtbare Position. Persistiert wird erst
//! beim Loslassen ueber den Aufrufer.

use super::{CanvasBounds, MemberId};

/// Laufende Drag-Geste einer Bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    /// Gezogene Bubble
    pub member_id: MemberId,
    /// Pointer-Position beim Drag-Start
    pub start_pointer: glam::Vec2,
    /// Top-Left-Position der Bubble beim Drag-Start
    pub initial_offset: glam::Vec2,
    /// Zuletzt berechnete, geklemmte Position
    pub current: glam::Vec2,
}

/// Zustand des Drag-Lifecycles.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragGesture),
}

impl DragState {
    /// Ob gerade eine Bubble gezogen wird.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// ID der gezogenen Bubble.
    pub fn dragged_member(&self) -> Option<&MemberId> {
        match self {
            DragState::Dragging(gesture) => Some(&gesture.member_id),
            DragState::Idle => None,
        }
    }

    /// `Idle → Dragging`: merkt Start-Pointer und aktuelle Bubble-Position.
    ///
    /// Liefert `false`, wenn bereits ein Drag laeuft (ein Pointer, ein Drag).
    pub fn begin(&mut self, member_id: MemberId, pointer: glam::Vec2, offset: glam::Vec2) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = DragState::Dragging(DragGesture {
            member_id,
            start_pointer: pointer,
            initial_offset: offset,
            current: offset,
        });
        true
    }

    /// `Dragging → Dragging`: neue Position = Startoffset + Pointer-Delta, geklemmt.
    ///
    /// Ohne aktiven Drag ein No-op (`None`).
    pub fn update(
        &mut self,
        pointer: glam::Vec2,
        bounds: &CanvasBounds,
    ) -> Option<(MemberId, glam::Vec2)> {
        let DragState::Dragging(gesture) = self else {
            return None;
        };
        let delta = pointer - gesture.start_pointer;
        gesture.current = bounds.clamp(gesture.initial_offset + delta);
        Some((gesture.member_id.clone(), gesture.current))
    }

    /// `Dragging → Idle`: liefert die zu persistierende Endposition.
    ///
    /// Ohne vorherigen Pointer-Down ein No-op (`None`).
    pub fn finish(&mut self) -> Option<(MemberId, glam::Vec2)> {
        match std::mem::take(self) {
            DragState::Dragging(gesture) => Some((gesture.member_id, gesture.current)),
            DragState::Idle => None,
        }
    }

    /// Bricht einen laufenden Drag ohne Ergebnis ab.
    pub fn cancel(&mut self) -> Option<MemberId> {
        match std::mem::take(self) {
            DragState::Dragging(gesture) => Some(gesture.member_id),
            DragState::Idle => None,
        }
    }
}
