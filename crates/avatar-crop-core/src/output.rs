//! The encoded avatar handed back to the caller.

use serde::{Deserialize, Serialize};

use crate::encode::JPEG_MIME;

/// A square JPEG, owned exclusively by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputImage {
    /// Encoded JPEG bytes.
    pub bytes: Vec<u8>,
    /// Width and height of the encoded image.
    pub side: u32,
    /// Quality used, on the 1-100 scale.
    pub quality: u8,
    /// Suggested file name.
    pub filename: String,
}

impl OutputImage {
    /// Always `image/jpeg`.
    pub fn mime_type(&self) -> &'static str {
        JPEG_MIME
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Take the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
