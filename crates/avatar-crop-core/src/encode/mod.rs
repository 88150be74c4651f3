//! Output encoding.
//!
//! Every avatar is written as baseline JPEG regardless of the source
//! format. Quality is given either on the encoder's 1-100 scale or as a
//! `[0, 1]` factor (see [`quality_from_unit`]).
//!
//! # Examples
//!
//! ```ignore
//! use avatar_crop_core::encode::encode_jpeg;
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let jpeg_bytes = encode_jpeg(&pixels, 100, 100, 90).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, quality_from_unit, EncodeError, DEFAULT_UNIT_QUALITY, JPEG_MIME};
