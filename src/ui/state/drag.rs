// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks whether the divider is currently held and where the drag began.

use crate::domain::comparison::SliderPosition;

/// Manages press-and-drag state for the divider
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Divider position when the drag started
    pub origin: Option<SliderPosition>,
}

impl DragState {
    /// Starts a drag operation. Returns false if one was already active.
    pub fn start(&mut self, position: SliderPosition) -> bool {
        if self.is_dragging {
            return false;
        }
        self.is_dragging = true;
        self.origin = Some(position);
        true
    }

    /// Stops the drag operation, returning where it began.
    ///
    /// Stopping while idle is a no-op and returns `None`.
    pub fn stop(&mut self) -> Option<SliderPosition> {
        if !self.is_dragging {
            return None;
        }
        self.is_dragging = false;
        self.origin.take()
    }
}
