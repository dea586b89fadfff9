//! Image encoding for the compression pipeline.
//!
//! Serializes render-surface pixels into one of the three formats the UI
//! offers. JPEG honors the quality setting; PNG and WebP are encoded
//! losslessly and ignore it, following the platform convention that lossless
//! formats have no quality knob.

mod jpeg;
mod png;
mod webp;

pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use webp::encode_webp;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::RenderSurface;

/// Errors that can occur while encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero.
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match width * height * 3.
    #[error("pixel buffer mismatch: expected {expected} bytes for the given dimensions, got {actual}")]
    PixelBufferMismatch { expected: usize, actual: usize },

    /// The underlying codec failed.
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}

/// The three output encodings the format selector offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// The MIME identifier the format selector uses.
    pub fn media_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::WebP => "image/webp",
        }
    }

    /// Filename extension: the subtype of the MIME identifier.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
        }
    }

    /// Parse a MIME identifier. Only the three offered formats are accepted.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type {
            "image/jpeg" => Some(OutputFormat::Jpeg),
            "image/png" => Some(OutputFormat::Png),
            "image/webp" => Some(OutputFormat::WebP),
            _ => None,
        }
    }

    /// Lossless formats ignore the quality setting.
    pub fn is_lossless(self) -> bool {
        !matches!(self, OutputFormat::Jpeg)
    }
}

/// Encode raw RGB pixels at `format`.
///
/// `quality` is given on the UI scale of 0.1 to 1.0 and mapped onto the
/// codec's 1-100 scale for lossy formats; lossless formats ignore it.
pub fn encode_pixels(
    pixels: &[u8],
    width: u32,
    height: u32,
    format: OutputFormat,
    quality: f32,
) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Jpeg => encode_jpeg(pixels, width, height, codec_quality(quality)),
        OutputFormat::Png => encode_png(pixels, width, height),
        OutputFormat::WebP => encode_webp(pixels, width, height),
    }
}

/// Encode the current contents of a render surface.
pub fn encode_surface(
    surface: &RenderSurface,
    format: OutputFormat,
    quality: f32,
) -> Result<Vec<u8>, EncodeError> {
    encode_pixels(surface.pixels(), surface.width(), surface.height(), format, quality)
}

/// Map the UI quality (0.1 - 1.0) onto the codec scale (1 - 100).
///
/// Out-of-range input saturates rather than fails, the way the platform
/// encoders treat it.
fn codec_quality(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Shared validation for all encoders.
fn validate(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::PixelBufferMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_round_trip() {
        for format in [OutputFormat::Jpeg, OutputFormat::Png, OutputFormat::WebP] {
            assert_eq!(OutputFormat::from_media_type(format.media_type()), Some(format));
        }
    }

    #[test]
    fn test_from_media_type_rejects_unknown() {
        assert_eq!(OutputFormat::from_media_type("image/gif"), None);
        assert_eq!(OutputFormat::from_media_type("image/JPEG"), None);
        assert_eq!(OutputFormat::from_media_type(""), None);
    }

    #[test]
    fn test_extension_is_media_subtype() {
        for format in [OutputFormat::Jpeg, OutputFormat::Png, OutputFormat::WebP] {
            let subtype = format.media_type().split('/').nth(1).unwrap();
            assert_eq!(format.extension(), subtype);
        }
    }

    #[test]
    fn test_lossless_flags() {
        assert!(!OutputFormat::Jpeg.is_lossless());
        assert!(OutputFormat::Png.is_lossless());
        assert!(OutputFormat::WebP.is_lossless());
    }

    #[test]
    fn test_codec_quality_mapping() {
        assert_eq!(codec_quality(0.7), 70);
        assert_eq!(codec_quality(0.1), 10);
        assert_eq!(codec_quality(1.0), 100);
        // Saturation outside the advertised range
        assert_eq!(codec_quality(0.0), 1);
        assert_eq!(codec_quality(-3.0), 1);
        assert_eq!(codec_quality(2.5), 100);
    }

    #[test]
    fn test_encode_pixels_dispatch() {
        let pixels = vec![128u8; 8 * 8 * 3];

        let jpeg = encode_pixels(&pixels, 8, 8, OutputFormat::Jpeg, 0.7).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

        let png = encode_pixels(&pixels, 8, 8, OutputFormat::Png, 0.7).unwrap();
        assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);

        let webp = encode_pixels(&pixels, 8, 8, OutputFormat::WebP, 0.7).unwrap();
        assert_eq!(&webp[0..4], b"RIFF");
        assert_eq!(&webp[8..12], b"WEBP");
    }

    #[test]
    fn test_encode_surface_empty_surface_errors() {
        let surface = RenderSurface::new();
        let result = encode_surface(&surface, OutputFormat::Jpeg, 0.7);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }
}
