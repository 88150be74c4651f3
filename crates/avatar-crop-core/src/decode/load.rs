//! Resolving an [`ImageReference`] into decoded RGB pixels.

use std::io::Cursor;

use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, ImageReader};

use super::orientation::{apply_orientation, read_orientation};
use super::{DecodeError, DecodedImage, ImageReference, SourceFormat};

const BASE64_MARKER: &str = ";base64,";

/// Load and decode a source image from any supported reference.
///
/// # Errors
///
/// * `DecodeError::Io` if a path cannot be read
/// * `DecodeError::InvalidDataUrl` if a data URL is malformed
/// * `DecodeError::InvalidFormat` / `DecodeError::CorruptedFile` if the
///   bytes cannot be decoded
pub fn load(reference: &ImageReference) -> Result<DecodedImage, DecodeError> {
    let image = match reference {
        ImageReference::Bytes(bytes) => decode_bytes(bytes)?,
        ImageReference::Path(path) => {
            let bytes = std::fs::read(path)
                .map_err(|e| DecodeError::Io(format!("{}: {}", path.display(), e)))?;
            decode_bytes(&bytes)?
        }
        ImageReference::DataUrl(url) => decode_bytes(&parse_data_url(url)?)?,
    };

    log::debug!(
        "decoded {} source: {}x{}",
        reference.kind(),
        image.width,
        image.height
    );
    Ok(image)
}

/// Decode encoded image bytes, applying EXIF orientation for JPEG input.
///
/// Alpha is composited onto black, which is what a transparent canvas
/// pixel turns into once it is written out as JPEG.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let format = sniff_format(bytes).ok_or(DecodeError::InvalidFormat)?;

    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = match format {
        SourceFormat::Jpeg => apply_orientation(img, read_orientation(bytes)),
        _ => img,
    };

    Ok(flatten_onto_black(img))
}

/// Identify the encoded format from its magic bytes.
pub fn sniff_format(bytes: &[u8]) -> Option<SourceFormat> {
    image::guess_format(bytes)
        .ok()
        .and_then(SourceFormat::from_image_format)
}

/// Extract the payload of a `data:image/<type>;base64,<payload>` URL.
pub fn parse_data_url(url: &str) -> Result<Vec<u8>, DecodeError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| DecodeError::InvalidDataUrl("missing data: scheme".to_string()))?;

    if !rest.starts_with("image/") {
        return Err(DecodeError::InvalidDataUrl(
            "media type is not an image".to_string(),
        ));
    }

    let marker = rest
        .find(BASE64_MARKER)
        .ok_or_else(|| DecodeError::InvalidDataUrl("missing base64 marker".to_string()))?;
    let payload: String = rest[marker + BASE64_MARKER.len()..]
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| DecodeError::InvalidDataUrl(format!("base64 decode failed: {}", e)))
}

fn flatten_onto_black(img: DynamicImage) -> DecodedImage {
    if !img.color().has_alpha() {
        return DecodedImage::from_rgb_image(img.into_rgb8());
    }

    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 3);
    for px in rgba.pixels() {
        let [r, g, b, a] = px.0;
        let a = a as u16;
        pixels.push(((r as u16 * a + 127) / 255) as u8);
        pixels.push(((g as u16 * a + 127) / 255) as u8);
        pixels.push(((b as u16 * a + 127) / 255) as u8);
    }
    DecodedImage::new(width, height, pixels)
}
