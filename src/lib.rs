// SPDX-License-Identifier: MPL-2.0
//! `iced_compare` is a before/after image comparison slider built with the
//! Iced GUI framework.
//!
//! Two images are stacked in one container and a draggable divider reveals
//! the "after" image to its right. The divider follows the mouse, touch
//! input and the arrow keys, and the view waits until both images have been
//! probed before showing the comparison.
//!
//! # Layers
//!
//! - [`domain`]: value objects (position, slots, readiness)
//! - [`ui::comparison`]: the slider sub-components and their canvas
//! - [`media::probe`]: asynchronous image probing
//! - [`config`], [`i18n`], [`logging`]: ambient services

#![doc(html_root_url = "https://docs.rs/iced_compare/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
