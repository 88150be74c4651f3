//! Source reference in, square JPEG out.

use crate::config::CropOptions;
use crate::decode::{self, DecodedImage, ImageReference};
use crate::encode::encode_jpeg;
use crate::error::CropError;
use crate::output::OutputImage;
use crate::transform::{square_crop, CropRegion, PixelRect};

/// Crop `region` out of `source` into a square JPEG.
///
/// The region is validated before the source is loaded, so an empty or
/// malformed region never costs a decode.
///
/// # Errors
///
/// * `CropError::Region` for negative, non-finite, empty or oversized regions
/// * `CropError::Decode` if the source cannot be loaded or decoded
/// * `CropError::Resize` if the `max_side` downsample fails
/// * `CropError::Encode` if JPEG encoding fails
pub fn crop_to_square(
    source: &ImageReference,
    region: &CropRegion,
    options: &CropOptions,
) -> Result<OutputImage, CropError> {
    let rect = region.to_pixel_rect()?;
    let image = decode::load(source)?;
    crop_decoded(&image, rect, options)
}

/// [`crop_to_square`] with default options and the given `[0, 1]` quality.
pub fn transform(
    source: &ImageReference,
    region: &CropRegion,
    quality: f32,
) -> Result<OutputImage, CropError> {
    crop_to_square(source, region, &CropOptions::new().with_quality(quality))
}

/// Crop and encode an already decoded source.
///
/// # Errors
///
/// * `CropError::Decode` if `image.pixels` doesn't match its dimensions
/// * `CropError::Resize` if the `max_side` downsample fails
/// * `CropError::Encode` if JPEG encoding fails
pub fn crop_decoded(
    image: &DecodedImage,
    rect: PixelRect,
    options: &CropOptions,
) -> Result<OutputImage, CropError> {
    image.check_buffer()?;
    let options = options.validated();

    let mut square = square_crop(image, rect);
    if let Some(max_side) = options.max_side {
        if square.width > max_side {
            square = decode::resize(&square, max_side, max_side, options.filter)
                .map_err(CropError::Resize)?;
        }
    }

    let quality = options.jpeg_quality();
    let bytes = encode_jpeg(&square.pixels, square.width, square.height, quality)?;

    log::debug!(
        "cropped {:?} from {}x{} source into {} ({} bytes)",
        rect,
        image.width,
        image.height,
        options.filename,
        bytes.len()
    );

    Ok(OutputImage {
        bytes,
        side: square.width,
        quality,
        filename: options.filename,
    })
}
