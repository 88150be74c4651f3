//! Avatar Crop WASM - WebAssembly bindings for avatar-crop-core
//!
//! # Module Structure
//!
//! - `crop` - One-shot square crop from bytes or a data URL
//! - `modal` - Crop modal with widget state and save/close callbacks
//! - `types` - WASM-compatible wrapper for the encoded output
//!
//! # Usage
//!
//! ```typescript
//! import init, { crop_to_square } from '@avatar-crop/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const out = crop_to_square(bytes, 40, 10, 300, 300, 0.92);
//! onComplete(new File([out.bytes()], out.filename, { type: out.mime_type }));
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod modal;
mod types;

pub use crop::{crop_data_url_to_square, crop_to_square, crop_with_options};
pub use modal::JsCropModal;
pub use types::JsOutputImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
