//! The compression session: all UI-visible state and its transitions.
//!
//! A [`CompressorSession`] owns the source image, the settings, the latest
//! compressed result and the scratch [`RenderSurface`]. State changes only
//! through named transitions (`load_file`, `set_scale`, `set_quality`,
//! `set_format`, `compress`), none of which touch unrelated fields. Control
//! flows one way: load, adjust settings, compress, download.
//!
//! The two behaviors the original UI left implicit are explicit, configurable
//! policies here: [`InvalidationPolicy`] decides whether a stale result
//! survives input changes, and [`RangePolicy`] decides how out-of-range
//! settings are treated at compression time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::datauri::{DataUriError, EncodedImageUri};
use crate::decode::{self, DecodeError, FilterType, RenderSurface};
use crate::encode::{self, EncodeError, OutputFormat};
use crate::export::DownloadArtifact;
use crate::{CompressionSettings, InvalidationPolicy, RangePolicy, SettingsError};

/// Media type recorded for a file the picker could not name and content
/// sniffing could not identify.
const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// A user-selected file: the raw bytes plus the MIME type the picker
/// reported (empty or absent for files the browser could not classify).
#[derive(Debug, Clone)]
pub struct FileInput {
    pub bytes: Vec<u8>,
    pub media_type: Option<String>,
}

/// Errors from loading a source image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The selected file had no content; the analog of a failed file read.
    #[error("selected file is empty")]
    EmptyFile,

    /// A data URI handed to [`CompressorSession::load_data_uri`] was malformed.
    #[error(transparent)]
    InvalidUri(#[from] DataUriError),
}

/// Errors from a compression run. Stage errors are wrapped transparently.
#[derive(Debug, Error)]
pub enum CompressError {
    /// `compress` was called before any source image was loaded.
    #[error("no source image loaded")]
    NoSource,

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// The result of a compression run: encoded bytes plus what they are.
#[derive(Debug, Clone)]
pub struct CompressedImage {
    format: OutputFormat,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl CompressedImage {
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The encoded bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Render as an encoded-image URI, usable as an `<img>` source.
    pub fn to_data_uri(&self) -> String {
        EncodedImageUri::new(self.format.media_type(), self.data.clone()).to_string()
    }
}

/// Session-level configuration: the named policy choices plus the resampling
/// filter. Defaults reproduce the original component's behavior.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// What happens to a stale result when the source or settings change.
    pub invalidation: InvalidationPolicy,
    /// Treatment of out-of-range scale/quality values at compression time.
    pub ranges: RangePolicy,
    /// Resampling filter used when drawing into the render surface.
    pub filter: FilterType,
}

/// State machine driving the load -> render -> encode -> download flow.
#[derive(Debug, Default)]
pub struct CompressorSession {
    config: SessionConfig,
    source: Option<EncodedImageUri>,
    settings: CompressionSettings,
    compressed: Option<CompressedImage>,
    surface: RenderSurface,
}

impl CompressorSession {
    /// A session with default settings and default (parity) policies.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn settings(&self) -> CompressionSettings {
        self.settings
    }

    pub fn source(&self) -> Option<&EncodedImageUri> {
        self.source.as_ref()
    }

    pub fn compressed(&self) -> Option<&CompressedImage> {
        self.compressed.as_ref()
    }

    /// Gates the Compress action.
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Gates the Download action.
    pub fn has_compressed(&self) -> bool {
        self.compressed.is_some()
    }

    /// Load a user-selected file as the new source image.
    ///
    /// `None` means nothing was picked and is a no-op. The stored media type
    /// comes from the picker's report when present, from content sniffing
    /// otherwise. No image validation happens here; undecodable bytes only
    /// surface when a compression run tries to decode them.
    pub fn load_file(&mut self, file: Option<FileInput>) -> Result<(), LoadError> {
        let Some(file) = file else {
            return Ok(());
        };
        if file.bytes.is_empty() {
            return Err(LoadError::EmptyFile);
        }

        let media_type = file
            .media_type
            .filter(|m| !m.is_empty())
            .or_else(|| decode::sniff_media_type(&file.bytes).map(str::to_owned))
            .unwrap_or_else(|| UNKNOWN_MEDIA_TYPE.to_owned());

        self.replace_source(EncodedImageUri::new(media_type, file.bytes));
        Ok(())
    }

    /// Load a source image already in data-URI form (the shape a
    /// `FileReader.readAsDataURL` flow produces).
    pub fn load_data_uri(&mut self, uri: &str) -> Result<(), LoadError> {
        let parsed = EncodedImageUri::parse(uri)?;
        if parsed.data().is_empty() {
            return Err(LoadError::EmptyFile);
        }
        self.replace_source(parsed);
        Ok(())
    }

    fn replace_source(&mut self, uri: EncodedImageUri) {
        log::info!("loaded {} source ({} bytes)", uri.media_type(), uri.data().len());
        self.source = Some(uri);
        self.apply_invalidation();
    }

    pub fn set_scale(&mut self, scale_percent: f32) {
        self.settings.scale_percent = scale_percent;
        self.apply_invalidation();
    }

    pub fn set_quality(&mut self, quality: f32) {
        self.settings.quality = quality;
        self.apply_invalidation();
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.settings.format = format;
        self.apply_invalidation();
    }

    fn apply_invalidation(&mut self) {
        if self.config.invalidation == InvalidationPolicy::ClearOnChange {
            self.compressed = None;
        }
    }

    /// Run one compression: decode the source, draw it scaled into the
    /// surface, encode at the configured format/quality, and publish the
    /// result (replacing any previous one).
    ///
    /// On error the previous compressed result is left untouched.
    pub fn compress(&mut self) -> Result<&CompressedImage, CompressError> {
        let source = self.source.as_ref().ok_or(CompressError::NoSource)?;
        let settings = self.settings.checked(self.config.ranges)?;

        let decoded = decode::decode_image(source.data())?;
        let (width, height) =
            decode::scaled_dimensions(decoded.width, decoded.height, settings.scale_percent);

        self.surface.render(&decoded, width, height, self.config.filter)?;
        let data = encode::encode_surface(&self.surface, settings.format, settings.quality)?;

        log::info!(
            "compressed {}x{} -> {}x{} {} ({} bytes)",
            decoded.width,
            decoded.height,
            width,
            height,
            settings.format.media_type(),
            data.len()
        );

        Ok(&*self.compressed.insert(CompressedImage {
            format: settings.format,
            width,
            height,
            data,
        }))
    }

    /// Build the download artifact for the current compressed result.
    ///
    /// `None` when no compression run has completed; callers are expected to
    /// keep the Download action disabled in that state.
    pub fn download(&self) -> Option<DownloadArtifact> {
        self.compressed.as_ref().map(DownloadArtifact::for_image)
    }

    /// The source image as a data URI, for preview display.
    pub fn source_data_uri(&self) -> Option<String> {
        self.source.as_ref().map(|uri| uri.to_string())
    }

    /// The compressed result as a data URI, for preview display.
    pub fn compressed_data_uri(&self) -> Option<String> {
        self.compressed.as_ref().map(|image| image.to_data_uri())
    }
}
