//! Core types for loading and decoding source images.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for source image loading and decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not in a format the decoder was built with.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image: {0}")]
    CorruptedFile(String),

    /// The reference could not be read (missing file, permissions).
    #[error("I/O error: {0}")]
    Io(String),

    /// The data URL is malformed or does not carry an image.
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    /// The pixel buffer length doesn't match the image dimensions.
    #[error("Pixel buffer mismatch: expected {expected} bytes (width * height * 3), got {actual}")]
    BufferMismatch { expected: usize, actual: usize },
}

/// Where a source image comes from.
///
/// Mirrors what a browser image element accepts: raw bytes already in
/// memory (a `Blob`), a location on disk, or an inline `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    /// Encoded image bytes held in memory.
    Bytes(Vec<u8>),
    /// Path to an encoded image file.
    Path(PathBuf),
    /// A `data:image/<type>;base64,<payload>` URL.
    DataUrl(String),
}

impl ImageReference {
    /// Short label used in log lines; never includes the payload.
    pub fn kind(&self) -> &'static str {
        match self {
            ImageReference::Bytes(_) => "bytes",
            ImageReference::Path(_) => "path",
            ImageReference::DataUrl(_) => "data-url",
        }
    }
}

impl From<Vec<u8>> for ImageReference {
    fn from(bytes: Vec<u8>) -> Self {
        ImageReference::Bytes(bytes)
    }
}

impl From<&[u8]> for ImageReference {
    fn from(bytes: &[u8]) -> Self {
        ImageReference::Bytes(bytes.to_vec())
    }
}

impl From<PathBuf> for ImageReference {
    fn from(path: PathBuf) -> Self {
        ImageReference::Path(path)
    }
}

impl From<&str> for ImageReference {
    /// Strings starting with `data:` become data URLs; anything else is a path.
    fn from(value: &str) -> Self {
        if value.starts_with("data:") {
            ImageReference::DataUrl(value.to_string())
        } else {
            ImageReference::Path(PathBuf::from(value))
        }
    }
}

/// Encoded formats recognised in a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    Jpeg,
    Png,
    WebP,
}

impl SourceFormat {
    /// Map from the image crate's format, if it is one we decode.
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(SourceFormat::Jpeg),
            image::ImageFormat::Png => Some(SourceFormat::Png),
            image::ImageFormat::WebP => Some(SourceFormat::WebP),
            _ => None,
        }
    }
}

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a black image of the given size.
    pub fn black(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; (width as usize) * (height as usize) * 3],
        }
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// RGB value at (x, y), or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        Some([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
    }

    /// Check that the pixel buffer holds exactly width * height RGB pixels.
    pub fn check_buffer(&self) -> Result<(), DecodeError> {
        let expected = (self.width as usize) * (self.height as usize) * 3;
        if self.pixels.len() != expected {
            return Err(DecodeError::BufferMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_from_str() {
        assert_eq!(
            ImageReference::from("data:image/png;base64,AAAA"),
            ImageReference::DataUrl("data:image/png;base64,AAAA".to_string())
        );
        assert_eq!(
            ImageReference::from("photos/me.png"),
            ImageReference::Path(PathBuf::from("photos/me.png"))
        );
    }

    #[test]
    fn test_reference_kind() {
        assert_eq!(ImageReference::Bytes(vec![]).kind(), "bytes");
        assert_eq!(ImageReference::from("a.jpg").kind(), "path");
        assert_eq!(ImageReference::from("data:,").kind(), "data-url");
    }

    #[test]
    fn test_source_format_mapping() {
        assert_eq!(
            SourceFormat::from_image_format(image::ImageFormat::Png),
            Some(SourceFormat::Png)
        );
        assert_eq!(SourceFormat::from_image_format(image::ImageFormat::Bmp), None);
    }

    #[test]
    fn test_black_image() {
        let img = DecodedImage::black(4, 2);
        assert_eq!(img.pixels.len(), 24);
        assert!(img.pixels.iter().all(|&p| p == 0));
        assert!(!img.is_empty());
    }

    #[test]
    fn test_pixel_lookup() {
        let img = DecodedImage::new(2, 1, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(img.pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(img.pixel(2, 0), None);
        assert_eq!(img.pixel(0, 1), None);
    }

    #[test]
    fn test_check_buffer() {
        assert!(DecodedImage::black(3, 2).check_buffer().is_ok());

        let short = DecodedImage {
            width: 10,
            height: 10,
            pixels: vec![0; 10],
        };
        assert!(matches!(
            short.check_buffer(),
            Err(DecodeError::BufferMismatch {
                expected: 300,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_decoded_image_empty() {
        let img = DecodedImage::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::InvalidDataUrl("missing base64 marker".to_string());
        assert_eq!(err.to_string(), "Invalid data URL: missing base64 marker");

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
