//! Input model: the drag gesture state machine.
//!
//! `DragState` is the gesture being tracked between pointer-down and
//! pointer-up. It carries the grab offset needed to keep the logo under the
//! same spot of the pointer for the whole drag, and is dropped on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// Internal state for the drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving the overlay.
    Dragging {
        /// Pointer position minus overlay position at pointer-down.
        grab_offset: Point,
    },
}

impl DragState {
    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Top-left the overlay should move to for a pointer at `pointer`.
    ///
    /// Returns `None` when idle. The result is unclamped.
    #[must_use]
    pub fn target_for(&self, pointer: Point) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { grab_offset } => Some(pointer.offset_from(*grab_offset)),
        }
    }
}
