// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! # Components
//!
//! - [`error_display`] - Consistent error presentation with technical detail
//!   lines

pub mod error_display;

pub use error_display::ErrorDisplay;
