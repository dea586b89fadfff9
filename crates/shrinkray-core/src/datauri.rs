//! Encoded-image URIs.
//!
//! Both the source image and the compressed result are held in the
//! self-describing `data:<media type>;base64,<payload>` shape, usable
//! directly as an `<img>` source or a download href.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Errors from parsing a `data:` URI.
#[derive(Debug, Error)]
pub enum DataUriError {
    /// The string does not start with the `data:` scheme.
    #[error("not a data: URI")]
    MissingScheme,

    /// The `;base64,` marker separating media type and payload is absent.
    #[error("missing \";base64,\" marker")]
    MissingBase64Marker,

    /// The payload is not valid base64.
    #[error("invalid base64 payload: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
}

/// An image held as a media type plus its encoded bytes.
///
/// Stored decoded; the URI string form is produced on demand via `Display`
/// so repeated state reads do not pay for base64 round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImageUri {
    media_type: String,
    data: Vec<u8>,
}

impl EncodedImageUri {
    pub fn new(media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            data,
        }
    }

    /// Parse a `data:<media type>;base64,<payload>` string.
    pub fn parse(uri: &str) -> Result<Self, DataUriError> {
        let rest = uri.strip_prefix("data:").ok_or(DataUriError::MissingScheme)?;
        let marker = rest
            .find(";base64,")
            .ok_or(DataUriError::MissingBase64Marker)?;
        let payload = &rest[marker + ";base64,".len()..];
        let data = STANDARD.decode(payload.trim())?;
        Ok(Self {
            media_type: rest[..marker].to_string(),
            data,
        })
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl fmt::Display for EncodedImageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.media_type, STANDARD.encode(&self.data))
    }
}
