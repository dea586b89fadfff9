//! Core types for image decoding and rendering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from decoding or rendering an image.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes do not look like any supported image container.
    #[error("unrecognized or unsupported image data")]
    UnsupportedFormat,

    /// The container was recognized but its contents could not be decoded.
    #[error("corrupted or truncated image data: {0}")]
    Corrupted(String),

    /// A render was requested at dimensions no surface can have.
    #[error("invalid render dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Resampling filter used when drawing into the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor (fastest, blocky).
    Nearest,
    /// Bilinear, comparable to the smoothing a canvas `drawImage` applies.
    #[default]
    Bilinear,
    /// Lanczos3 (slowest, sharpest).
    Lanczos3,
}

impl FilterType {
    pub(crate) fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// A decoded image: RGB pixels at their natural size.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
    /// RGB pixel data, row-major, 3 bytes per pixel.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// View the pixels as an `image::RgbImage` for resampling.
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
