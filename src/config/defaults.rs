// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Probe**: Image probe timeout and size limit
//! - **Logging**: Default log filter

// ==========================================================================
// Probe Defaults
// ==========================================================================

/// Default time allowed for fetching and decoding one image (in seconds).
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 15;

/// Minimum probe timeout (in seconds).
pub const MIN_PROBE_TIMEOUT_SECS: u64 = 1;

/// Maximum probe timeout (in seconds).
pub const MAX_PROBE_TIMEOUT_SECS: u64 = 120;

/// Default upper bound for a single image resource (in megabytes).
pub const DEFAULT_PROBE_MAX_SIZE_MB: u64 = 64;

/// Minimum size limit (in megabytes).
pub const MIN_PROBE_MAX_SIZE_MB: u64 = 1;

/// Maximum size limit (in megabytes).
pub const MAX_PROBE_MAX_SIZE_MB: u64 = 512;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default `tracing` filter directive when neither `RUST_LOG` nor the
/// config file specify one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(MIN_PROBE_TIMEOUT_SECS <= DEFAULT_PROBE_TIMEOUT_SECS);
    assert!(DEFAULT_PROBE_TIMEOUT_SECS <= MAX_PROBE_TIMEOUT_SECS);
    assert!(MIN_PROBE_MAX_SIZE_MB <= DEFAULT_PROBE_MAX_SIZE_MB);
    assert!(DEFAULT_PROBE_MAX_SIZE_MB <= MAX_PROBE_MAX_SIZE_MB);
};
