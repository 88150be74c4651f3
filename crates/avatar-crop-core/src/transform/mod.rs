//! Crop regions and the square crop.
//!
//! # Coordinate System
//!
//! - Crop regions are in source pixel coordinates, after EXIF orientation
//! - Origin is the top-left corner
//! - Fractional values are rounded to the nearest pixel

mod region;
mod square;

pub use region::{CropRegion, PixelRect, RegionError, MAX_SIDE};
pub use square::square_crop;
