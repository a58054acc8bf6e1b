// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`comparison`] - The before/after slider and its canvas
//! - [`state`] - Drag state and scoped window-wide listener registrations
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Overlay styles for labels and the readout
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod comparison;
pub mod components;
pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod widgets;
