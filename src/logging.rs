// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Installs a `tracing-subscriber` formatter. `RUST_LOG` takes precedence over
//! the level passed in by the caller (CLI flag or config file).

use crate::config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::EnvFilter;

/// Builds the filter used by [`init`].
///
/// Invalid directives fall back to [`DEFAULT_LOG_LEVEL`].
#[must_use]
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    level
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber. Calling it again is harmless.
pub fn init(level: Option<&str>) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .try_init();

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}
