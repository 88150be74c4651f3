//! WASM bindings for the square crop.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! import { crop_to_square } from '@avatar-crop/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const out = crop_to_square(bytes, area.x, area.y, area.width, area.height, 0.92);
//! const blob = new Blob([out.bytes()], { type: out.mime_type });
//! ```

use avatar_crop_core::{
    crop_to_square as core_crop, CropError, CropOptions, CropRegion, ImageReference,
};
use wasm_bindgen::prelude::*;

use crate::types::JsOutputImage;

/// Crop a region of encoded image bytes into a square JPEG.
///
/// # Arguments
///
/// * `bytes` - Encoded source image (JPEG, PNG or WebP)
/// * `x`, `y`, `width`, `height` - Region in source pixels
/// * `quality` - JPEG quality factor, 0.0 to 1.0
///
/// # Errors
///
/// Returns an error string if the region is empty or invalid, the source
/// cannot be decoded, or encoding fails.
#[wasm_bindgen]
pub fn crop_to_square(
    bytes: &[u8],
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    quality: f32,
) -> Result<JsOutputImage, JsValue> {
    run(
        ImageReference::Bytes(bytes.to_vec()),
        CropRegion::new(x, y, width, height),
        &CropOptions::new().with_quality(quality),
    )
    .map_err(to_js_error)
}

/// Same as [`crop_to_square`] for a `data:image/...;base64,` URL, as
/// produced by `FileReader.readAsDataURL`.
#[wasm_bindgen]
pub fn crop_data_url_to_square(
    data_url: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    quality: f32,
) -> Result<JsOutputImage, JsValue> {
    run(
        ImageReference::DataUrl(data_url.to_string()),
        CropRegion::new(x, y, width, height),
        &CropOptions::new().with_quality(quality),
    )
    .map_err(to_js_error)
}

/// Crop with a region object (`{ x, y, width, height }`) and an optional
/// options object (`{ quality, filename, maxSide, filter }`).
#[wasm_bindgen]
pub fn crop_with_options(
    bytes: &[u8],
    region: JsValue,
    options: JsValue,
) -> Result<JsOutputImage, JsValue> {
    let region: CropRegion = serde_wasm_bindgen::from_value(region)?;
    let options = parse_options(options)?;
    run(ImageReference::Bytes(bytes.to_vec()), region, &options).map_err(to_js_error)
}

pub(crate) fn parse_options(options: JsValue) -> Result<CropOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(CropOptions::default());
    }
    Ok(serde_wasm_bindgen::from_value(options)?)
}

pub(crate) fn run(
    source: ImageReference,
    region: CropRegion,
    options: &CropOptions,
) -> Result<JsOutputImage, CropError> {
    core_crop(&source, &region, options).map(JsOutputImage::from_output)
}

pub(crate) fn to_js_error(err: CropError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use avatar_crop_core::RegionError;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image_fixture(width, height);
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn image_fixture(width: u32, height: u32) -> image::RgbImage {
        image::RgbImage::from_pixel(width, height, image::Rgb([90, 160, 30]))
    }

    #[test]
    fn test_run_produces_square() {
        let out = run(
            ImageReference::Bytes(png_bytes(60, 40)),
            CropRegion::new(0.0, 0.0, 30.0, 20.0),
            &CropOptions::default(),
        )
        .unwrap();
        assert_eq!(out.side(), 30);
        assert_eq!(&out.as_bytes()[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_run_rejects_empty_region() {
        let result = run(
            ImageReference::Bytes(png_bytes(10, 10)),
            CropRegion::new(0.0, 0.0, 0.0, 0.0),
            &CropOptions::default(),
        );
        assert!(matches!(
            result,
            Err(CropError::Region(RegionError::Empty { .. }))
        ));
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_crop_to_square_invalid_bytes() {
        let result = crop_to_square(&[0, 1, 2, 3], 0.0, 0.0, 1.0, 1.0, 0.9);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_crop_to_square_empty_region() {
        // Region is validated before the bytes are looked at
        let result = crop_to_square(&[0u8; 4], 0.0, 0.0, 0.0, 1.0, 0.9);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_parse_options_undefined() {
        let opts = parse_options(JsValue::UNDEFINED).unwrap();
        assert_eq!(opts, CropOptions::default());
    }
}
