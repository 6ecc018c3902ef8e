//! Image transforms for uploaded attachments.
//!
//! | Output     | Transform                                    | Encoding      |
//! |------------|----------------------------------------------|---------------|
//! | original   | fit within 1920×1080, aspect kept, no upscale | JPEG, q85     |
//! | thumbnail  | fill + center crop to a square edge          | WEBP          |
//!
//! Both operate on in-memory bytes; persistence is the caller's concern.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

/// Bounding box of stored originals.
pub const ORIGINAL_MAX_WIDTH: u32 = 1920;
pub const ORIGINAL_MAX_HEIGHT: u32 = 1080;

/// JPEG quality of stored originals.
pub const ORIGINAL_JPEG_QUALITY: u8 = 85;

#[derive(Debug, thiserror::Error)]
pub enum ImagingError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),
}

fn decode(bytes: &[u8]) -> Result<DynamicImage, ImagingError> {
    image::load_from_memory(bytes).map_err(|e| ImagingError::Decode(e.to_string()))
}

/// Shrink `img` to fit the original bounding box; smaller images pass through.
pub fn fit_within(img: DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    if img.width() <= max_width && img.height() <= max_height {
        img
    } else {
        img.resize(max_width, max_height, FilterType::Lanczos3)
    }
}

/// Decode an upload, fit it within 1920×1080 and re-encode as JPEG q85.
pub fn process_original(bytes: &[u8]) -> Result<Vec<u8>, ImagingError> {
    let img = fit_within(decode(bytes)?, ORIGINAL_MAX_WIDTH, ORIGINAL_MAX_HEIGHT);
    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut out = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut out, ORIGINAL_JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| ImagingError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

/// Render the square `edge`×`edge` WEBP thumbnail of a stored original.
pub fn render_thumbnail(bytes: &[u8], edge: u32) -> Result<Vec<u8>, ImagingError> {
    let img = decode(bytes)?;
    let filled = img.resize_to_fill(edge, edge, FilterType::Lanczos3);
    let rgba = DynamicImage::ImageRgba8(filled.to_rgba8());

    let mut out = Cursor::new(Vec::new());
    let encoder = WebPEncoder::new_lossless(&mut out);
    rgba.write_with_encoder(encoder)
        .map_err(|e| ImagingError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use image::{ImageFormat, RgbImage};

    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn large_original_is_fitted_and_jpeg() {
        let processed = process_original(&png_bytes(3840, 1080)).unwrap();
        assert_eq!(image::guess_format(&processed).unwrap(), ImageFormat::Jpeg);

        let img = image::load_from_memory(&processed).unwrap();
        assert_eq!(img.width(), 1920);
        assert_eq!(img.height(), 540);
    }

    #[test]
    fn small_original_is_not_upscaled() {
        let processed = process_original(&png_bytes(300, 200)).unwrap();
        let img = image::load_from_memory(&processed).unwrap();
        assert_eq!((img.width(), img.height()), (300, 200));
    }

    #[test]
    fn portrait_original_is_bounded_by_height() {
        let processed = process_original(&png_bytes(1000, 2160)).unwrap();
        let img = image::load_from_memory(&processed).unwrap();
        assert_eq!(img.height(), 1080);
        assert_eq!(img.width(), 500);
    }

    #[test]
    fn thumbnail_is_exact_square_webp() {
        let thumb = render_thumbnail(&png_bytes(800, 400), 600).unwrap();
        assert_eq!(image::guess_format(&thumb).unwrap(), ImageFormat::WebP);

        let img = image::load_from_memory(&thumb).unwrap();
        assert_eq!((img.width(), img.height()), (600, 600));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert_matches!(
            process_original(b"definitely not an image"),
            Err(ImagingError::Decode(_))
        );
    }
}
