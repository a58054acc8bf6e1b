// SPDX-License-Identifier: MPL-2.0
//! Image probes.
//!
//! A probe checks that an image resource can be retrieved and decoded, and
//! yields the decoded image on success. Each invocation resolves exactly once.
//!
//! # Sources
//!
//! - `http://` and `https://` URLs are downloaded with `reqwest`
//! - `file://` URLs and plain paths are read from disk
//!
//! Any other scheme fails with [`ProbeError::UnsupportedSource`].

use crate::config::ProbeConfig;
use crate::error::{Error, ProbeError};
use futures_util::future::BoxFuture;
use futures_util::{FutureExt, StreamExt};
use iced::widget::image;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Decoded image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl LoadedAsset {
    /// Decodes an encoded image held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Decode`] if the bytes are not a supported image.
    pub fn decode(bytes: &[u8]) -> Result<Self, ProbeError> {
        let img = image_rs::load_from_memory(bytes)?;
        let (width, height) = (img.width(), img.height());
        if width == 0 || height == 0 {
            return Err(ProbeError::Decode("image has empty dimensions".into()));
        }
        let pixels = img.to_rgba8().into_vec();
        Ok(Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        })
    }
}

/// Where an asset URL points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Http(String),
    File(PathBuf),
}

impl AssetSource {
    /// Interprets an opaque asset URL.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::UnsupportedSource`] for empty input or an unknown scheme.
    pub fn parse(url: &str) -> Result<Self, ProbeError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ProbeError::UnsupportedSource(url.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(AssetSource::Http(trimmed.to_string()));
        }
        if lower.starts_with("file://") {
            let path = &trimmed["file://".len()..];
            if path.is_empty() {
                return Err(ProbeError::UnsupportedSource(url.to_string()));
            }
            return Ok(AssetSource::File(PathBuf::from(path)));
        }
        if trimmed.contains("://") {
            return Err(ProbeError::UnsupportedSource(url.to_string()));
        }
        Ok(AssetSource::File(PathBuf::from(trimmed)))
    }
}

/// Something that can check an image URL asynchronously.
pub trait Prober: Send + Sync {
    fn probe(&self, url: &str) -> BoxFuture<'static, Result<LoadedAsset, ProbeError>>;
}

/// Probes images on disk or over HTTP and decodes them with `image`.
#[derive(Debug, Clone)]
pub struct ImageProber {
    client: reqwest::Client,
    timeout: Duration,
    max_bytes: u64,
}

impl ImageProber {
    /// Builds a prober from the `[probe]` config section.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be initialized.
    pub fn new(config: &ProbeConfig) -> Result<Self, Error> {
        Self::with_limits(config.timeout(), config.max_bytes())
    }

    /// Builds a prober with explicit limits.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be initialized.
    pub fn with_limits(timeout: Duration, max_bytes: u64) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Probe(ProbeError::Network(e.to_string())))?;
        Ok(Self {
            client,
            timeout,
            max_bytes,
        })
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }
}

impl Prober for ImageProber {
    fn probe(&self, url: &str) -> BoxFuture<'static, Result<LoadedAsset, ProbeError>> {
        let client = self.client.clone();
        let timeout = self.timeout;
        let max_bytes = self.max_bytes;
        let url = url.to_string();

        async move {
            let work = async {
                let source = AssetSource::parse(&url)?;
                let bytes = match &source {
                    AssetSource::Http(location) => fetch_http(&client, location, max_bytes).await?,
                    AssetSource::File(path) => read_file(path, max_bytes).await?,
                };
                tokio::task::spawn_blocking(move || LoadedAsset::decode(&bytes))
                    .await
                    .map_err(|e| ProbeError::Decode(e.to_string()))?
            };

            tokio::time::timeout(timeout, work)
                .await
                .unwrap_or(Err(ProbeError::TimedOut))
        }
        .boxed()
    }
}

async fn fetch_http(
    client: &reqwest::Client,
    url: &str,
    max_bytes: u64,
) -> Result<Vec<u8>, ProbeError> {
    let response = client.get(url).send().await?.error_for_status()?;
    if response.content_length().is_some_and(|len| len > max_bytes) {
        return Err(ProbeError::TooLarge { limit: max_bytes });
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if (body.len() + chunk.len()) as u64 > max_bytes {
            return Err(ProbeError::TooLarge { limit: max_bytes });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

async fn read_file(path: &Path, max_bytes: u64) -> Result<Vec<u8>, ProbeError> {
    let location = path.display().to_string();
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| ProbeError::from_io(&e, &location))?;
    if metadata.len() > max_bytes {
        return Err(ProbeError::TooLarge { limit: max_bytes });
    }
    tokio::fs::read(path)
        .await
        .map_err(|e| ProbeError::from_io(&e, &location))
}
