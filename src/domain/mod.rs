// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core slider types with ZERO external dependencies.
//!
//! This module contains pure value objects and rules. It depends on nothing
//! but `std`, so every invariant can be tested without a renderer.
//!
//! # Modules
//!
//! - [`comparison`]: Slider types ([`SliderPosition`](comparison::SliderPosition),
//!   [`ContainerBounds`](comparison::ContainerBounds),
//!   [`AssetStatus`](comparison::AssetStatus), [`DisplayState`](comparison::DisplayState))

pub mod comparison;
