// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Probe Error: {0}")]
    Probe(#[from] ProbeError),
}

/// Reasons an image probe can fail.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The URL scheme is not one the prober understands
    #[error("Unsupported image source: {0}")]
    UnsupportedSource(String),

    /// Local file does not exist
    #[error("Image not found: {0}")]
    NotFound(String),

    /// Other local I/O failure (permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Remote server answered with a non-success status
    #[error("HTTP status {status}")]
    Http { status: u16 },

    /// Connection or transfer failure
    #[error("Network error: {0}")]
    Network(String),

    /// Resource exceeds the configured size limit
    #[error("Image exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    /// Bytes were fetched but are not a decodable image
    #[error("Decoding failed: {0}")]
    Decode(String),

    /// Probe did not complete within the configured timeout
    #[error("Timed out")]
    TimedOut,
}

impl ProbeError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ProbeError::UnsupportedSource(_) => "error-probe-unsupported-source",
            ProbeError::NotFound(_) => "error-probe-not-found",
            ProbeError::Io(_) => "error-probe-io",
            ProbeError::Http { .. } => "error-probe-http",
            ProbeError::Network(_) => "error-probe-network",
            ProbeError::TooLarge { .. } => "error-probe-too-large",
            ProbeError::Decode(_) => "error-probe-decode",
            ProbeError::TimedOut => "error-probe-timed-out",
        }
    }

    /// Classifies a local file error.
    pub fn from_io(err: &std::io::Error, location: &str) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ProbeError::NotFound(location.to_string()),
            _ => ProbeError::Io(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return ProbeError::Http {
                status: status.as_u16(),
            };
        }
        if err.is_timeout() {
            return ProbeError::TimedOut;
        }
        ProbeError::Network(err.to_string())
    }
}

impl From<image_rs::ImageError> for ProbeError {
    fn from(err: image_rs::ImageError) -> Self {
        ProbeError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
