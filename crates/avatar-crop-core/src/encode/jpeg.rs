//! JPEG encoding of the square output.
//!
//! Uses the `image` crate's baseline JPEG encoder. Output is deterministic:
//! identical pixels and quality always produce identical bytes.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

/// MIME type of every encoded output.
pub const JPEG_MIME: &str = "image/jpeg";

/// Quality used when the caller's value is not a number (browser default).
pub const DEFAULT_UNIT_QUALITY: f32 = 0.92;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Map a `[0, 1]` quality factor (as taken by canvas `toBlob`) to the
/// encoder's 1-100 scale.
///
/// Values outside the range are clamped; NaN falls back to
/// [`DEFAULT_UNIT_QUALITY`].
pub fn quality_from_unit(quality: f32) -> u8 {
    let quality = if quality.is_nan() {
        DEFAULT_UNIT_QUALITY
    } else {
        quality.clamp(0.0, 1.0)
    };
    ((quality * 100.0).round() as u8).clamp(1, 100)
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, clamped)
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);
    let mut buffer = Vec::new();

    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    log::debug!(
        "encoded {}x{} JPEG at quality {}: {} bytes",
        width,
        height,
        quality,
        buffer.len()
    );
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_from_unit() {
        assert_eq!(quality_from_unit(0.92), 92);
        assert_eq!(quality_from_unit(1.0), 100);
        assert_eq!(quality_from_unit(0.5), 50);
    }

    #[test]
    fn test_quality_from_unit_clamps() {
        assert_eq!(quality_from_unit(0.0), 1);
        assert_eq!(quality_from_unit(-3.0), 1);
        assert_eq!(quality_from_unit(7.5), 100);
        assert_eq!(quality_from_unit(f32::NAN), 92);
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let pixels = vec![128u8; 100 * 100 * 3];
        let jpeg_bytes = encode_jpeg(&pixels, 100, 100, 90).unwrap();

        // SOI / EOI markers
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);
        let len = jpeg_bytes.len();
        assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let pixels = vec![128u8; 10 * 10 * 3];
        assert!(encode_jpeg(&pixels, 10, 10, 0).is_ok());
        assert!(encode_jpeg(&pixels, 10, 10, 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data() {
        let pixels = vec![128u8; 99 * 100 * 3];
        let result = encode_jpeg(&pixels, 100, 100, 90);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_jpeg_zero_dimensions() {
        let result = encode_jpeg(&[], 0, 100, 90);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
        let result = encode_jpeg(&[], 100, 0, 90);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_decodes_back_to_same_size() {
        let pixels = vec![200u8; 33 * 33 * 3];
        let jpeg = encode_jpeg(&pixels, 33, 33, 80).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (33, 33));
    }
}
