//! The square crop.
//!
//! The output is a `side x side` canvas with `side = max(width, height)`.
//! The selected rectangle is copied to the top-left corner; nothing is
//! centered, and uncovered pixels stay black.

use super::PixelRect;
use crate::decode::DecodedImage;

/// Copy `rect` of `image` into the top-left of a new square image.
///
/// Parts of `rect` outside the source are clipped, as with canvas
/// `drawImage`: a source pixel at `(rect.x + i, rect.y + j)` always lands
/// at `(i, j)`.
pub fn square_crop(image: &DecodedImage, rect: PixelRect) -> DecodedImage {
    let side = rect.side();
    let mut output = DecodedImage::black(side, side);

    let x_end = rect.x.saturating_add(rect.width).min(image.width);
    let y_end = rect.y.saturating_add(rect.height).min(image.height);

    if rect.x >= x_end || rect.y >= y_end {
        log::warn!(
            "crop region {:?} lies outside the {}x{} source",
            rect,
            image.width,
            image.height
        );
        return output;
    }

    let copy_width = x_end - rect.x;
    let copy_height = y_end - rect.y;
    if copy_width < rect.width || copy_height < rect.height {
        log::warn!(
            "crop region {:?} clipped to {}x{} by the {}x{} source",
            rect,
            copy_width,
            copy_height,
            image.width,
            image.height
        );
    }

    let row_bytes = copy_width as usize * 3;
    let src_stride = image.width as usize * 3;
    let dst_stride = side as usize * 3;

    // Copy pixel data row by row
    for row in 0..copy_height as usize {
        let src_start = (rect.y as usize + row) * src_stride + rect.x as usize * 3;
        let dst_start = row * dst_stride;
        output.pixels[dst_start..dst_start + row_bytes]
            .copy_from_slice(&image.pixels[src_start..src_start + row_bytes]);
    }

    output
}
