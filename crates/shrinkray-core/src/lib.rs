//! Shrinkray Core - Image compression pipeline
//!
//! This crate provides the processing side of the Shrinkray image compressor:
//! decoding an uploaded file, drawing it scaled onto a render surface,
//! re-encoding it at a chosen format and quality, and packaging the result
//! for download. The browser-facing glue lives in `shrinkray-wasm`.

pub mod datauri;
pub mod decode;
pub mod encode;
pub mod export;
pub mod session;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use datauri::{DataUriError, EncodedImageUri};
pub use decode::{decode_image, scaled_dimensions, DecodeError, DecodedImage, FilterType, RenderSurface};
pub use encode::{encode_pixels, encode_surface, EncodeError, OutputFormat};
pub use export::{DownloadArtifact, DOWNLOAD_BASENAME};
pub use session::{CompressError, CompressedImage, CompressorSession, FileInput, LoadError, SessionConfig};

/// User-adjustable settings for a compression run.
///
/// The numeric fields have advertised ranges ([`Self::SCALE_RANGE`],
/// [`Self::QUALITY_RANGE`]) that the UI communicates but does not enforce;
/// how values outside them are treated is decided by the session's
/// [`RangePolicy`] at compression time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionSettings {
    /// Output size as a percentage of the source dimensions (10 to 100).
    pub scale_percent: f32,
    /// Encoding quality (0.1 to 1.0). Ignored by lossless formats.
    pub quality: f32,
    /// Target encoding for the compressed result.
    pub format: OutputFormat,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            scale_percent: 50.0,
            quality: 0.7,
            format: OutputFormat::Jpeg,
        }
    }
}

impl CompressionSettings {
    /// Advertised range for `scale_percent`.
    pub const SCALE_RANGE: RangeInclusive<f32> = 10.0..=100.0;
    /// Advertised range for `quality`.
    pub const QUALITY_RANGE: RangeInclusive<f32> = 0.1..=1.0;

    /// Create settings with the default values (50%, 0.7, JPEG).
    pub fn new() -> Self {
        Self::default()
    }

    /// Check both numeric fields against their advertised ranges.
    pub fn is_in_range(&self) -> bool {
        Self::SCALE_RANGE.contains(&self.scale_percent)
            && Self::QUALITY_RANGE.contains(&self.quality)
    }

    /// Apply a [`RangePolicy`], yielding the settings a compression run
    /// should actually use.
    pub fn checked(&self, policy: RangePolicy) -> Result<Self, SettingsError> {
        match policy {
            RangePolicy::PassThrough => Ok(*self),
            RangePolicy::Clamp => {
                let mut settings = *self;
                settings.scale_percent = settings
                    .scale_percent
                    .clamp(*Self::SCALE_RANGE.start(), *Self::SCALE_RANGE.end());
                settings.quality = settings
                    .quality
                    .clamp(*Self::QUALITY_RANGE.start(), *Self::QUALITY_RANGE.end());
                Ok(settings)
            }
            RangePolicy::Reject => {
                if self.is_in_range() {
                    Ok(*self)
                } else {
                    Err(SettingsError::OutOfRange {
                        scale_percent: self.scale_percent,
                        quality: self.quality,
                    })
                }
            }
        }
    }
}

/// Treatment of out-of-range `scale_percent`/`quality` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RangePolicy {
    /// Hand values to the encoders unchanged and rely on their own clamping.
    #[default]
    PassThrough,
    /// Clamp both values into their advertised ranges before use.
    Clamp,
    /// Fail the compression run when either value is out of range.
    Reject,
}

/// What happens to an existing compressed result when the source image or a
/// setting changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InvalidationPolicy {
    /// Keep the stale result until the user re-runs compression.
    #[default]
    KeepStale,
    /// Drop the result as soon as any of its inputs change.
    ClearOnChange,
}

/// Error for settings rejected under [`RangePolicy::Reject`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings out of range: scale {scale_percent}%, quality {quality}")]
    OutOfRange { scale_percent: f32, quality: f32 },
}
