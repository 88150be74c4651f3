//! Options for the crop pipeline.
//!
//! `CropOptions` is plain serde data so hosts can pass it as JSON or, from
//! WASM, as a JS object. Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::decode::ResampleFilter;
use crate::encode::{quality_from_unit, DEFAULT_UNIT_QUALITY};

/// File name handed to the caller with the encoded avatar.
pub const DEFAULT_FILENAME: &str = "avatar.jpg";

/// Settings for one crop-to-square call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropOptions {
    /// JPEG quality factor, 0.0 to 1.0.
    pub quality: f32,
    /// Name attached to the output artifact.
    pub filename: String,
    /// Downsample the square to at most this side, if set.
    pub max_side: Option<u32>,
    /// Filter used for the optional downsample.
    pub filter: ResampleFilter,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_UNIT_QUALITY,
            filename: DEFAULT_FILENAME.to_string(),
            max_side: None,
            filter: ResampleFilter::Lanczos3,
        }
    }
}

impl CropOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same options with a different quality factor.
    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    /// Same options with a maximum output side.
    pub fn with_max_side(mut self, max_side: u32) -> Self {
        self.max_side = Some(max_side);
        self
    }

    /// Normalize user-supplied values: clamp quality, drop a zero
    /// `max_side`, restore an empty filename.
    pub fn validated(&self) -> Self {
        let quality = if self.quality.is_nan() {
            DEFAULT_UNIT_QUALITY
        } else {
            self.quality.clamp(0.0, 1.0)
        };
        let filename = if self.filename.trim().is_empty() {
            DEFAULT_FILENAME.to_string()
        } else {
            self.filename.clone()
        };
        Self {
            quality,
            filename,
            max_side: self.max_side.filter(|&side| side > 0),
            filter: self.filter,
        }
    }

    /// Quality on the encoder's 1-100 scale.
    pub fn jpeg_quality(&self) -> u8 {
        quality_from_unit(self.quality)
    }
}
