//! Stateless one-shot compression.
//!
//! For callers that do not need session state (e.g. a Web Worker compressing
//! a single file and posting the bytes back), this runs the whole decode ->
//! render -> encode pipeline in one call.

use shrinkray_core::{
    decode_image, encode_surface, scaled_dimensions, FilterType, OutputFormat, RenderSurface,
};
use wasm_bindgen::prelude::*;

/// Compress image bytes in one shot.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes as a `Uint8Array`
/// * `scale_percent` - Output size as a percentage of the source (10-100)
/// * `quality` - Encoding quality (0.1-1.0); ignored by PNG and WebP
/// * `media_type` - Target format: "image/jpeg", "image/png" or "image/webp"
///
/// # Returns
///
/// The encoded bytes as a `Uint8Array`, or an error if the format is not one
/// of the three offered, the bytes do not decode, or encoding fails.
#[wasm_bindgen]
pub fn compress_bytes(
    bytes: &[u8],
    scale_percent: f32,
    quality: f32,
    media_type: &str,
) -> Result<Vec<u8>, JsValue> {
    let format = OutputFormat::from_media_type(media_type)
        .ok_or_else(|| JsValue::from_str(&format!("unsupported format: {media_type}")))?;

    let decoded = decode_image(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let (width, height) = scaled_dimensions(decoded.width, decoded.height, scale_percent);

    let mut surface = RenderSurface::new();
    surface
        .render(&decoded, width, height, FilterType::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    encode_surface(&surface, format, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}
