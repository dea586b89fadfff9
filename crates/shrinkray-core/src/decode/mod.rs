//! Image decoding for the compression pipeline.
//!
//! This module provides:
//! - Decoding user-supplied bytes into RGB pixels, with the container format
//!   sniffed rather than trusted (the file picker accepts anything)
//! - EXIF orientation correction, matching how browsers orient uploads
//! - The reusable [`RenderSurface`] that scaled drawing targets
//!
//! All operations are synchronous; when compiled to WASM they run on the
//! event loop (or a Web Worker) and are serialized by construction.

mod reader;
mod surface;
mod types;

pub use reader::{decode_image, sniff_media_type};
pub use surface::{scaled_dimensions, RenderSurface};
pub use types::{DecodeError, DecodedImage, FilterType};
