// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::Config;
use crate::media::probe::Prober;
use crate::ui::comparison;
use std::sync::Arc;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Comparison(comparison::Message),
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed from `main.rs` into the application.
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Location of the image shown left of the divider.
    pub before: String,
    /// Location of the image shown right of the divider.
    pub after: String,
    /// Configuration loaded by the launcher.
    pub config: Config,
    /// Prober used to check both images.
    pub prober: Arc<dyn Prober>,
}
