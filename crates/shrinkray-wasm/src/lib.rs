//! Shrinkray WASM - WebAssembly bindings for the Shrinkray image compressor
//!
//! This crate exposes the shrinkray-core pipeline to JavaScript/TypeScript.
//! The host page keeps only the DOM glue (file input, numeric controls, the
//! anchor-click download); everything between "file bytes in" and "encoded
//! bytes out" happens here.
//!
//! # Module Structure
//!
//! - `session` - The stateful compression session driving the UI
//! - `compress` - Stateless one-shot compression helper
//! - `types` - JavaScript-friendly wrappers for results and downloads
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCompressorSession } from '@shrinkray/wasm';
//!
//! await init();
//!
//! const session = new JsCompressorSession();
//! session.load_file(new Uint8Array(await file.arrayBuffer()), file.type);
//! session.set_scale(50);
//! const result = session.compress();
//! document.querySelector('img.preview').src = result.data_uri();
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod session;
mod types;

// Re-export public types
pub use compress::compress_bytes;
pub use session::JsCompressorSession;
pub use types::{JsCompressedImage, JsDownloadArtifact};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&"shrinkray wasm ready".into());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// MIME identifiers of the formats the encoder offers, for populating the
/// format selector.
#[wasm_bindgen]
pub fn supported_formats() -> js_sys::Array {
    use shrinkray_core::OutputFormat;

    [OutputFormat::Jpeg, OutputFormat::Png, OutputFormat::WebP]
        .iter()
        .map(|format| JsValue::from_str(format.media_type()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
