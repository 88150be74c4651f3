//! WASM-compatible wrapper for the encoded avatar.

use avatar_crop_core::OutputImage;
use wasm_bindgen::prelude::*;

/// An encoded square JPEG, ready to wrap in a `Blob` or `File`.
///
/// The bytes live in WASM memory until `bytes()` copies them out as a
/// `Uint8Array`.
#[wasm_bindgen]
pub struct JsOutputImage {
    bytes: Vec<u8>,
    side: u32,
    filename: String,
    mime_type: &'static str,
}

#[wasm_bindgen]
impl JsOutputImage {
    /// Width and height of the square image in pixels
    #[wasm_bindgen(getter)]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Suggested file name (`avatar.jpg` unless configured)
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.filename.clone()
    }

    /// Always `image/jpeg`
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.mime_type.to_string()
    }

    /// Number of encoded bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the JPEG bytes as Uint8Array (copies).
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional; wasm-bindgen's finalizer releases it otherwise.
    pub fn free(self) {}
}

impl JsOutputImage {
    pub(crate) fn from_output(output: OutputImage) -> Self {
        let mime_type = output.mime_type();
        Self {
            side: output.side,
            filename: output.filename,
            bytes: output.bytes,
            mime_type,
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
