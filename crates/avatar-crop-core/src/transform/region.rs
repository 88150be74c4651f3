//! Crop regions in source pixel coordinates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest output side accepted. Matches the common browser canvas limit.
pub const MAX_SIDE: u32 = 16_384;

/// Errors raised while validating a crop region.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    /// A field is negative, NaN or infinite.
    #[error("Invalid crop region: {field} must be a finite, non-negative number (got {value})")]
    InvalidField { field: &'static str, value: f64 },

    /// Width or height rounds to zero pixels.
    #[error("Empty crop region: {width}x{height}")]
    Empty { width: u32, height: u32 },

    /// The square output would exceed [`MAX_SIDE`].
    #[error("Crop region too large: side {side} exceeds {max}")]
    TooLarge { side: u32, max: u32 },

    /// Save was requested before the widget reported a region.
    #[error("No crop region selected")]
    NotSelected,
}

/// The rectangle a user selected, as reported by the cropping widget.
///
/// Values may be fractional; they are rounded to whole pixels by
/// [`CropRegion::to_pixel_rect`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRegion {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Validate and round to whole pixels.
    ///
    /// # Errors
    ///
    /// * `RegionError::InvalidField` for negative or non-finite fields
    /// * `RegionError::Empty` when width or height rounds to zero
    /// * `RegionError::TooLarge` when the square side exceeds [`MAX_SIDE`]
    pub fn to_pixel_rect(&self) -> Result<PixelRect, RegionError> {
        let x = to_pixels("x", self.x)?;
        let y = to_pixels("y", self.y)?;
        let width = to_pixels("width", self.width)?;
        let height = to_pixels("height", self.height)?;

        if width == 0 || height == 0 {
            return Err(RegionError::Empty { width, height });
        }

        let rect = PixelRect {
            x,
            y,
            width,
            height,
        };
        if rect.side() > MAX_SIDE {
            return Err(RegionError::TooLarge {
                side: rect.side(),
                max: MAX_SIDE,
            });
        }
        Ok(rect)
    }
}

fn to_pixels(field: &'static str, value: f64) -> Result<u32, RegionError> {
    if !value.is_finite() || value < 0.0 {
        return Err(RegionError::InvalidField { field, value });
    }
    // Saturating float-to-int cast; oversized values are caught by MAX_SIDE
    Ok(value.round() as u32)
}

/// A validated, whole-pixel crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Side of the square output: the larger of width and height.
    #[inline]
    pub fn side(&self) -> u32 {
        self.width.max(self.height)
    }
}
