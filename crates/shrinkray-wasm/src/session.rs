//! The stateful compression session exposed to JavaScript.
//!
//! One `JsCompressorSession` backs one page. The host wires its controls to
//! the named transitions and reads `has_source`/`has_compressed` to enable
//! the Compress and Download buttons.

use shrinkray_core::{CompressorSession, FileInput, OutputFormat, SessionConfig};
use wasm_bindgen::prelude::*;

use crate::types::{JsCompressedImage, JsDownloadArtifact};

/// A compression session: source image, settings, latest result.
#[wasm_bindgen]
pub struct JsCompressorSession {
    inner: CompressorSession,
}

#[wasm_bindgen]
impl JsCompressorSession {
    /// Create a session with default settings (50%, 0.7, JPEG) and the
    /// default behavior-parity policies.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsCompressorSession {
        JsCompressorSession {
            inner: CompressorSession::new(),
        }
    }

    /// Create a session with an explicit configuration object, e.g.
    /// `{ invalidation: "ClearOnChange", ranges: "Clamp" }`. Omitted fields
    /// keep their defaults.
    pub fn with_config(config: JsValue) -> Result<JsCompressorSession, JsValue> {
        let config: SessionConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsCompressorSession {
            inner: CompressorSession::with_config(config),
        })
    }

    /// Load a user-selected file as the new source image.
    ///
    /// `media_type` is the picker's `File.type`; pass `undefined` or an
    /// empty string to let the content be sniffed instead.
    pub fn load_file(&mut self, bytes: &[u8], media_type: Option<String>) -> Result<(), JsValue> {
        self.inner
            .load_file(Some(FileInput {
                bytes: bytes.to_vec(),
                media_type,
            }))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Load a source image already in data-URI form (e.g. from
    /// `FileReader.readAsDataURL`).
    pub fn load_data_uri(&mut self, uri: &str) -> Result<(), JsValue> {
        self.inner
            .load_data_uri(uri)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set the scale percentage (advertised range 10-100).
    pub fn set_scale(&mut self, scale_percent: f32) {
        self.inner.set_scale(scale_percent);
    }

    /// Set the encoding quality (advertised range 0.1-1.0).
    pub fn set_quality(&mut self, quality: f32) {
        self.inner.set_quality(quality);
    }

    /// Set the output format by MIME identifier; only "image/jpeg",
    /// "image/png" and "image/webp" are accepted.
    pub fn set_format(&mut self, media_type: &str) -> Result<(), JsValue> {
        let format = OutputFormat::from_media_type(media_type)
            .ok_or_else(|| JsValue::from_str(&format!("unsupported format: {media_type}")))?;
        self.inner.set_format(format);
        Ok(())
    }

    /// Run one compression with the current source and settings.
    pub fn compress(&mut self) -> Result<JsCompressedImage, JsValue> {
        self.inner
            .compress()
            .map(JsCompressedImage::from_compressed)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The download artifact for the current result, or `undefined` when no
    /// compression run has completed. Never throws.
    pub fn download(&self) -> Option<JsDownloadArtifact> {
        self.inner.download().map(JsDownloadArtifact::from_artifact)
    }

    /// True once a source image is loaded; gates the Compress button.
    pub fn has_source(&self) -> bool {
        self.inner.has_source()
    }

    /// True once a compression run has completed; gates the Download button.
    pub fn has_compressed(&self) -> bool {
        self.inner.has_compressed()
    }

    /// The source image as a data URI, for the original-image preview.
    #[wasm_bindgen(getter)]
    pub fn source_data_uri(&self) -> Option<String> {
        self.inner.source_data_uri()
    }

    /// The compressed result as a data URI, for the result preview.
    #[wasm_bindgen(getter)]
    pub fn compressed_data_uri(&self) -> Option<String> {
        self.inner.compressed_data_uri()
    }

    /// Current settings as a plain object `{ scale_percent, quality, format }`.
    pub fn settings(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.settings())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for JsCompressorSession {
    fn default() -> Self {
        Self::new()
    }
}
