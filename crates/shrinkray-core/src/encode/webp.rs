//! WebP encoding.
//!
//! The `image` crate ships a lossless WebP encoder only, so WebP output is
//! treated as a lossless format and the quality setting is ignored.

use std::io::Cursor;

use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{validate, EncodeError};

/// Encode RGB pixels as lossless WebP.
pub fn encode_webp(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    WebPEncoder::new_lossless(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "WebP",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_webp_container_markers() {
        let pixels = vec![90u8; 10 * 10 * 3];
        let webp = encode_webp(&pixels, 10, 10).unwrap();

        assert_eq!(&webp[0..4], b"RIFF");
        assert_eq!(&webp[8..12], b"WEBP");
    }

    #[test]
    fn test_encode_webp_is_lossless() {
        let pixels: Vec<u8> = (0..8 * 8 * 3).map(|i| (i * 53 % 256) as u8).collect();
        let webp = encode_webp(&pixels, 8, 8).unwrap();

        let decoded = image::load_from_memory(&webp).unwrap().into_rgb8();
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn test_encode_webp_rejects_zero_dimensions() {
        let result = encode_webp(&[], 0, 0);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_webp_rejects_mismatched_buffer() {
        let pixels = vec![0u8; 100];
        let result = encode_webp(&pixels, 10, 10);
        assert!(matches!(result, Err(EncodeError::PixelBufferMismatch { .. })));
    }
}
