// SPDX-License-Identifier: MPL-2.0
//! Image retrieval and decoding.

pub mod probe;

pub use probe::{AssetSource, ImageProber, LoadedAsset, Prober};
