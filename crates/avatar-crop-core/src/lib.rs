//! Avatar Crop Core - square avatar cropping
//!
//! This crate turns a user-selected rectangle of a source image into a
//! square JPEG: load and decode the source, copy the rectangle into the
//! top-left of a `max(width, height)` square, and encode.

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod output;
mod pipeline;
pub mod state;
pub mod transform;

pub use config::CropOptions;
pub use decode::{DecodeError, DecodedImage, ImageReference};
pub use encode::EncodeError;
pub use error::CropError;
pub use output::OutputImage;
pub use pipeline::{crop_decoded, crop_to_square, transform};
pub use state::CropState;
pub use transform::{square_crop, CropRegion, PixelRect, RegionError};

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose, Engine as _};

    use super::*;
    use crate::decode::fixtures::{jpeg_bytes, png_bytes, webp_bytes, with_exif_orientation};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn decoded(output: &OutputImage) -> image::DynamicImage {
        image::load_from_memory_with_format(&output.bytes, image::ImageFormat::Jpeg).unwrap()
    }

    #[test]
    fn test_exact_square_region() {
        init_logger();
        let source = ImageReference::Bytes(png_bytes(120, 140));
        let output = transform(&source, &CropRegion::new(0.0, 0.0, 100.0, 100.0), 0.9).unwrap();

        assert_eq!(output.side, 100);
        let img = decoded(&output);
        assert_eq!((img.width(), img.height()), (100, 100));
    }

    #[test]
    fn test_side_is_larger_dimension() {
        let source = ImageReference::Bytes(png_bytes(200, 200));

        let wide = transform(&source, &CropRegion::new(10.0, 10.0, 80.0, 30.0), 0.9).unwrap();
        assert_eq!(wide.side, 80);

        let tall = transform(&source, &CropRegion::new(10.0, 10.0, 30.0, 120.0), 0.9).unwrap();
        assert_eq!(tall.side, 120);
        let img = decoded(&tall);
        assert_eq!((img.width(), img.height()), (120, 120));
    }

    #[test]
    fn test_output_metadata() {
        let source = ImageReference::Bytes(png_bytes(32, 32));
        let output = transform(&source, &CropRegion::new(0.0, 0.0, 16.0, 16.0), 0.75).unwrap();

        assert_eq!(output.mime_type(), "image/jpeg");
        assert_eq!(output.filename, "avatar.jpg");
        assert_eq!(output.quality, 75);
        assert!(!output.is_empty());
    }

    #[test]
    fn test_png_and_jpeg_sources_both_become_jpeg() {
        let region = CropRegion::new(0.0, 0.0, 16.0, 16.0);
        for bytes in [png_bytes(32, 32), jpeg_bytes(32, 32)] {
            let output = transform(&ImageReference::Bytes(bytes), &region, 0.9).unwrap();
            assert_eq!(
                image::guess_format(&output.bytes).unwrap(),
                image::ImageFormat::Jpeg
            );
            assert_eq!(output.mime_type(), "image/jpeg");
        }
    }

    #[test]
    fn test_deterministic_output() {
        let source = ImageReference::Bytes(png_bytes(64, 48));
        let region = CropRegion::new(4.0, 2.0, 40.0, 30.0);

        let first = transform(&source, &region, 0.8).unwrap();
        let second = transform(&source, &region, 0.8).unwrap();
        assert_eq!(first.bytes, second.bytes);
    }

    #[test]
    fn test_zero_area_region_rejected() {
        let source = ImageReference::Bytes(png_bytes(10, 10));

        let result = transform(&source, &CropRegion::new(0.0, 0.0, 0.0, 5.0), 0.9);
        assert!(matches!(
            result,
            Err(CropError::Region(RegionError::Empty { .. }))
        ));

        let result = transform(&source, &CropRegion::new(0.0, 0.0, 5.0, 0.0), 0.9);
        assert!(matches!(
            result,
            Err(CropError::Region(RegionError::Empty { .. }))
        ));
    }

    #[test]
    fn test_region_checked_before_decode() {
        // Garbage source plus an empty region reports the region
        let source = ImageReference::Bytes(vec![1, 2, 3]);
        let result = transform(&source, &CropRegion::new(0.0, 0.0, 0.0, 0.0), 0.9);
        assert!(matches!(result, Err(CropError::Region(_))));
    }

    #[test]
    fn test_invalid_source_is_decode_error() {
        let region = CropRegion::new(0.0, 0.0, 10.0, 10.0);

        let result = transform(&ImageReference::Bytes(vec![0, 1, 2, 3]), &region, 0.9);
        assert!(matches!(result, Err(CropError::Decode(_))));

        let missing = std::env::temp_dir().join("avatar-crop-no-such-source.png");
        let result = transform(&ImageReference::Path(missing), &region, 0.9);
        assert!(matches!(result, Err(CropError::Decode(DecodeError::Io(_)))));

        let result = transform(&ImageReference::from("data:image/png;base64,@@@"), &region, 0.9);
        assert!(matches!(
            result,
            Err(CropError::Decode(DecodeError::InvalidDataUrl(_)))
        ));
    }

    #[test]
    fn test_data_url_source() {
        let url = format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(png_bytes(50, 50))
        );
        let output = transform(
            &ImageReference::from(url.as_str()),
            &CropRegion::new(5.0, 5.0, 20.0, 20.0),
            0.9,
        )
        .unwrap();
        assert_eq!(output.side, 20);
    }

    #[test]
    fn test_crop_is_not_centered() {
        // White source, wide region: the bottom band of the square stays black
        let img = DecodedImage::new(40, 40, vec![255u8; 40 * 40 * 3]);
        let rect = CropRegion::new(0.0, 0.0, 32.0, 8.0).to_pixel_rect().unwrap();
        let output = crop_decoded(&img, rect, &CropOptions::new().with_quality(1.0)).unwrap();

        let jpeg = decoded(&output).into_rgb8();
        assert_eq!(jpeg.dimensions(), (32, 32));
        assert!(jpeg.get_pixel(16, 2).0[0] > 200);
        assert!(jpeg.get_pixel(16, 28).0[0] < 50);
    }

    #[test]
    fn test_max_side_downsamples() {
        let source = ImageReference::Bytes(png_bytes(300, 300));
        let options = CropOptions::new().with_max_side(64);
        let output =
            crop_to_square(&source, &CropRegion::new(0.0, 0.0, 200.0, 150.0), &options).unwrap();

        assert_eq!(output.side, 64);
        let img = decoded(&output);
        assert_eq!((img.width(), img.height()), (64, 64));
    }

    #[test]
    fn test_max_side_never_upscales() {
        let source = ImageReference::Bytes(png_bytes(100, 100));
        let options = CropOptions::new().with_max_side(512);
        let output =
            crop_to_square(&source, &CropRegion::new(0.0, 0.0, 40.0, 40.0), &options).unwrap();
        assert_eq!(output.side, 40);
    }

    #[test]
    fn test_exif_rotated_source_uses_upright_coordinates() {
        // 16x8 source stored sideways; upright it is 8x16
        let source = ImageReference::Bytes(with_exif_orientation(&jpeg_bytes(16, 8), 6));
        let output = transform(&source, &CropRegion::new(0.0, 0.0, 8.0, 16.0), 0.95).unwrap();
        assert_eq!(output.side, 16);

        // Bottom half of the upright image is the green right half of the stored one
        let output = transform(&source, &CropRegion::new(0.0, 8.0, 8.0, 8.0), 0.95).unwrap();
        assert_eq!(output.side, 8);
        let img = decoded(&output).into_rgb8();
        let [r, g, _] = img.get_pixel(4, 4).0;
        assert!(g > 200 && r < 80, "expected green, got r={} g={}", r, g);
    }

    #[test]
    fn test_webp_source() {
        init_logger();
        let source = ImageReference::Bytes(webp_bytes(20, 10));
        let output = transform(&source, &CropRegion::new(0.0, 0.0, 20.0, 10.0), 0.9).unwrap();

        assert_eq!(output.side, 20);
        assert_eq!(output.mime_type(), "image/jpeg");
        assert_eq!(decoded(&output).into_rgb8().dimensions(), (20, 20));
    }

    #[test]
    fn test_crop_decoded_rejects_mismatched_buffer() {
        let image = DecodedImage {
            width: 10,
            height: 10,
            pixels: vec![0; 10],
        };
        let rect = CropRegion::new(0.0, 0.0, 10.0, 10.0).to_pixel_rect().unwrap();
        let result = crop_decoded(&image, rect, &CropOptions::default());

        assert!(matches!(
            result,
            Err(CropError::Decode(DecodeError::BufferMismatch {
                expected: 300,
                actual: 10
            }))
        ));
    }

    #[test]
    fn test_state_feeds_pipeline() {
        let state = CropState::new()
            .with_zoom(1.5)
            .with_completed_region(CropRegion::new(2.0, 2.0, 24.0, 24.0));
        assert!(state.is_ready());

        let region = state.completed_region().unwrap();
        let output = transform(&ImageReference::Bytes(png_bytes(40, 40)), &region, 0.9).unwrap();
        assert_eq!(output.side, 24);
    }
}
