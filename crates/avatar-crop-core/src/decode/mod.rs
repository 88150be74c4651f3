//! Source image loading and decoding.
//!
//! This module provides functionality for:
//! - Resolving an [`ImageReference`] (bytes, path or data URL) to bytes
//! - Decoding JPEG, PNG and WebP sources to RGB pixels
//! - Applying EXIF orientation so crop coordinates match what the user saw
//! - Resizing decoded images
//!
//! # Architecture
//!
//! All operations are synchronous and single-threaded, so they behave the
//! same natively and inside WASM. Every call allocates its own buffers.
//!
//! # Examples
//!
//! ```ignore
//! use avatar_crop_core::decode::{load, ImageReference};
//!
//! let image = load(&ImageReference::from("me.png")).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod load;
mod orientation;
mod resize;
mod types;

pub use load::{decode_bytes, load, parse_data_url, sniff_format};
pub use orientation::{read_orientation, Orientation};
pub use resize::{resize, ResampleFilter};
pub use types::{DecodeError, DecodedImage, ImageReference, SourceFormat};

#[cfg(test)]
pub(crate) use load::fixtures;
