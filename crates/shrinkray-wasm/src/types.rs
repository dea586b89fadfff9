//! JavaScript-friendly wrappers for compression results.
//!
//! These types copy their data to JavaScript memory on access; the
//! authoritative state stays inside the session in WASM memory.

use shrinkray_core::{CompressedImage, DownloadArtifact};
use wasm_bindgen::prelude::*;

/// A compression result exposed to JavaScript.
#[wasm_bindgen]
pub struct JsCompressedImage {
    media_type: &'static str,
    width: u32,
    height: u32,
    data_uri: String,
    byte_length: usize,
}

#[wasm_bindgen]
impl JsCompressedImage {
    /// MIME identifier of the encoding ("image/jpeg", "image/png", "image/webp")
    #[wasm_bindgen(getter)]
    pub fn media_type(&self) -> String {
        self.media_type.to_string()
    }

    /// Output width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Output height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of the encoded bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// The result as a data URI, usable directly as an `<img>` source.
    pub fn data_uri(&self) -> String {
        self.data_uri.clone()
    }
}

impl JsCompressedImage {
    pub(crate) fn from_compressed(image: &CompressedImage) -> Self {
        Self {
            media_type: image.format().media_type(),
            width: image.width(),
            height: image.height(),
            data_uri: image.to_data_uri(),
            byte_length: image.data().len(),
        }
    }
}

/// A ready-to-save download exposed to JavaScript: filename, blob type and
/// blob contents for the anchor-click save flow.
#[wasm_bindgen]
pub struct JsDownloadArtifact {
    file_name: String,
    media_type: String,
    data: Vec<u8>,
}

#[wasm_bindgen]
impl JsDownloadArtifact {
    /// Suggested filename: `compressed_image.<ext>`
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.file_name.clone()
    }

    /// MIME type for the blob
    #[wasm_bindgen(getter)]
    pub fn media_type(&self) -> String {
        self.media_type.clone()
    }

    /// The encoded bytes as a Uint8Array (copied to JavaScript memory).
    pub fn data(&self) -> Vec<u8> {
        self.data.clone()
    }
}

impl JsDownloadArtifact {
    pub(crate) fn from_artifact(artifact: DownloadArtifact) -> Self {
        Self {
            file_name: artifact.file_name().to_string(),
            media_type: artifact.media_type().to_string(),
            data: artifact.into_data(),
        }
    }
}
