//! Drag gesture state machine.
//!
//! A gesture is the span from one press to the matching release. The session
//! snapshot makes every move a pure function of the current pointer position,
//! so high-frequency move events stay O(1) with no accumulated error.

use super::geometry::{Constraints, Dimensions, Pan};

/// Snapshot taken at press time: where the pointer went down and what the
/// pan was at that moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub start_x: f64,
    pub start_y: f64,
    pub start_pan: Pan,
}

/// Either no gesture is in progress or exactly one session exists. A move
/// without a session is unrepresentable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(GestureSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// Begin a session at the given pointer position. A press while already
    /// dragging restarts the session in place, so no stale snapshot survives.
    pub fn press(&mut self, x: f64, y: f64, pan: Pan) {
        *self = DragState::Dragging(GestureSession {
            start_x: x,
            start_y: y,
            start_pan: pan,
        });
    }

    /// Candidate pan for the current pointer position, clamped against the
    /// constraints in effect *now* (not the ones at press time, so a resize
    /// mid-drag is respected). `None` while idle.
    pub fn drag_to(
        &self,
        x: f64,
        y: f64,
        viewport: Dimensions,
        constraints: &Constraints,
    ) -> Option<Pan> {
        let DragState::Dragging(session) = self else {
            return None;
        };
        let delta_x = (x - session.start_x) / viewport.width;
        let delta_y = (y - session.start_y) / viewport.height;
        Some(constraints.clamp(Pan {
            x: session.start_pan.x + delta_x,
            y: session.start_pan.y + delta_y,
        }))
    }

    /// Release or any release-equivalent event (pointer leaving the viewport,
    /// touch cancel). Unconditional, so a gesture can never get stuck.
    pub fn release(&mut self) {
        *self = DragState::Idle;
    }
}
