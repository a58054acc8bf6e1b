// SPDX-License-Identifier: MPL-2.0
//! Comparison domain types.
//!
//! This module provides the value objects shared by the slider controllers
//! and the renderer.

pub mod asset;
pub mod position;

pub use asset::{AssetSlot, AssetStatus, DisplayState, FailedAssets};
pub use position::{position_bounds, ContainerBounds, SliderPosition, StepDirection};
