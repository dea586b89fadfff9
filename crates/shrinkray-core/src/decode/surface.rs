//! The render surface: a reusable scratch buffer for scaled drawing.
//!
//! One surface is owned by the session and re-targeted on every compression
//! run; its previous contents are simply overwritten. Nothing outside a run
//! reads it, so no synchronization is needed.

use super::{DecodeError, DecodedImage, FilterType};

/// Compute target dimensions for a compression run.
///
/// The same percentage is applied to both axes (so aspect ratio is preserved
/// by construction) and each axis rounds to the nearest pixel, floored at
/// 1x1 so degenerate scales still produce a drawable surface.
pub fn scaled_dimensions(width: u32, height: u32, scale_percent: f32) -> (u32, u32) {
    let factor = f64::from(scale_percent) / 100.0;
    let scaled_w = (f64::from(width) * factor).round() as u32;
    let scaled_h = (f64::from(height) * factor).round() as u32;
    (scaled_w.max(1), scaled_h.max(1))
}

/// An in-memory RGB pixel buffer used as the drawing target before
/// re-encoding.
#[derive(Debug, Default)]
pub struct RenderSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RenderSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB pixel data of the last render, row-major, 3 bytes per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// True until the first render.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Draw `source` scaled to exactly `width` x `height`, replacing
    /// whatever a previous run left in the surface.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidDimensions`] for a zero-sized target,
    /// [`DecodeError::Corrupted`] when the source pixel buffer does not
    /// match its declared dimensions.
    pub fn render(
        &mut self,
        source: &DecodedImage,
        width: u32,
        height: u32,
        filter: FilterType,
    ) -> Result<(), DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::InvalidDimensions { width, height });
        }

        if source.width == width && source.height == height {
            // 100% scale: a straight copy, no resampling.
            self.pixels.clear();
            self.pixels.extend_from_slice(&source.pixels);
        } else {
            let rgb = source.to_rgb_image().ok_or_else(|| {
                DecodeError::Corrupted("pixel buffer does not match its dimensions".to_string())
            })?;
            let resized = image::imageops::resize(&rgb, width, height, filter.to_image_filter());
            self.pixels = resized.into_raw();
        }

        self.width = width;
        self.height = height;
        log::debug!(
            "rendered {}x{} source into {}x{} surface",
            source.width,
            source.height,
            width,
            height
        );
        Ok(())
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: each axis lands within half a pixel of size * percent / 100.
        #[test]
        fn prop_scaled_dimensions_formula(
            width in 1u32..=4000,
            height in 1u32..=4000,
            percent in 10u32..=100,
        ) {
            let (w, h) = scaled_dimensions(width, height, percent as f32);
            let exact_w = (width * percent) as f64 / 100.0;
            let exact_h = (height * percent) as f64 / 100.0;
            // The 1x1 floor takes over when the exact value drops below one.
            prop_assert!(
                (w as f64 - exact_w).abs() <= 0.5 + 1e-9 || (w == 1 && exact_w < 1.0),
                "w={} exact={}", w, exact_w
            );
            prop_assert!(
                (h as f64 - exact_h).abs() <= 0.5 + 1e-9 || (h == 1 && exact_h < 1.0),
                "h={} exact={}", h, exact_h
            );
        }

        /// Property: uniform scaling preserves aspect ratio up to rounding.
        #[test]
        fn prop_aspect_ratio_preserved(
            width in 10u32..=4000,
            height in 10u32..=4000,
            percent in 10u32..=100,
        ) {
            let (w, h) = scaled_dimensions(width, height, percent as f32);
            let original = width as f64 / height as f64;
            let scaled = w as f64 / h as f64;
            // Rounding each axis by at most half a pixel bounds the ratio
            // drift by (original + 1) / (2 * h).
            let tolerance = (original + 1.0) / (2.0 * h as f64);
            prop_assert!(
                (original - scaled).abs() <= tolerance,
                "ratio drifted: {} -> {} (tolerance {})",
                original,
                scaled,
                tolerance
            );
        }

        /// Property: scaling never produces a zero dimension.
        #[test]
        fn prop_dimensions_never_zero(
            width in 1u32..=100,
            height in 1u32..=100,
            percent in 0u32..=100,
        ) {
            let (w, h) = scaled_dimensions(width, height, percent as f32);
            prop_assert!(w >= 1 && h >= 1);
        }

        /// Property: rendering always yields a buffer of exactly w*h*3 bytes.
        #[test]
        fn prop_render_buffer_size(
            src_w in 1u32..=64,
            src_h in 1u32..=64,
            dst_w in 1u32..=64,
            dst_h in 1u32..=64,
        ) {
            let src = DecodedImage {
                width: src_w,
                height: src_h,
                pixels: vec![128u8; (src_w * src_h * 3) as usize],
            };
            let mut surface = RenderSurface::new();
            surface.render(&src, dst_w, dst_h, FilterType::Bilinear).unwrap();
            prop_assert_eq!(surface.pixels().len(), (dst_w * dst_h * 3) as usize);
        }
    }
}
