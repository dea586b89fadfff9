//! Decoding user-supplied files into RGB pixel data.
//!
//! The file picker performs no type validation, so anything can arrive here.
//! The container format is sniffed from the bytes themselves, and EXIF
//! orientation is applied so a rotated phone photo comes out the same way a
//! browser would display it.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, DecodedImage};

/// Decode an image from raw file bytes.
///
/// The format is guessed from the content; EXIF orientation, where present,
/// is baked into the returned pixels.
///
/// # Errors
///
/// [`DecodeError::UnsupportedFormat`] when the bytes match no known
/// container, [`DecodeError::Corrupted`] when a recognized image fails to
/// decode.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let orientation = Orientation::from_exif(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;
    if reader.format().is_none() {
        return Err(DecodeError::UnsupportedFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    let rgb = orientation.apply(img).into_rgb8();
    Ok(DecodedImage::from_rgb_image(rgb))
}

/// Sniff the media type of raw file bytes.
///
/// Used as a fallback when the file picker reports no type. Returns `None`
/// for content the `image` crate does not recognize.
pub fn sniff_media_type(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes).ok().map(|f| f.to_mime_type())
}

/// EXIF orientation tag values 1-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90,
    Transverse,
    Rotate270,
}

impl Orientation {
    /// Read the orientation tag from the container, defaulting to `Normal`
    /// when there is no EXIF block or no orientation field.
    fn from_exif(bytes: &[u8]) -> Self {
        let mut cursor = Cursor::new(bytes);
        match Reader::new().read_from_container(&mut cursor) {
            Ok(exif) => exif
                .get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
                .map(Self::from_tag)
                .unwrap_or(Orientation::Normal),
            Err(_) => Orientation::Normal,
        }
    }

    fn from_tag(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270,
            _ => Orientation::Normal,
        }
    }

    fn apply(self, img: DynamicImage) -> DynamicImage {
        match self {
            Orientation::Normal => img,
            Orientation::FlipHorizontal => img.fliph(),
            Orientation::Rotate180 => img.rotate180(),
            Orientation::FlipVertical => img.flipv(),
            Orientation::Transpose => img.rotate90().fliph(),
            Orientation::Rotate90 => img.rotate90(),
            Orientation::Transverse => img.rotate270().fliph(),
            Orientation::Rotate270 => img.rotate270(),
        }
    }
}
