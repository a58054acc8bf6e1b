// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State helpers shared by the comparison sub-components, kept apart from the
//! components themselves.

pub mod drag;
pub mod listeners;

pub use drag::DragState;
pub use listeners::{GlobalListener, ListenerGuard, ListenerRegistry, DRAG_LISTENERS};
