//! Errors surfaced by the crop pipeline.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::transform::RegionError;

/// Any failure of [`crop_to_square`](crate::crop_to_square).
///
/// None of these are retried; the caller decides how to report them.
#[derive(Debug, Error)]
pub enum CropError {
    /// The crop region was rejected before the source was touched.
    #[error(transparent)]
    Region(#[from] RegionError),

    /// The source could not be loaded or decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Downsampling the square to `max_side` failed.
    #[error("Downsample failed: {0}")]
    Resize(#[source] DecodeError),

    /// The output could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err: CropError = DecodeError::InvalidFormat.into();
        assert_eq!(err.to_string(), "Invalid or unsupported image format");

        let err: CropError = RegionError::Empty { width: 0, height: 4 }.into();
        assert_eq!(err.to_string(), "Empty crop region: 0x4");

        let err = CropError::Resize(DecodeError::InvalidFormat);
        assert_eq!(
            err.to_string(),
            "Downsample failed: Invalid or unsupported image format"
        );
    }
}
