//! Turning a compression result into a downloadable file.

use crate::session::CompressedImage;

/// Base name of every downloaded file; the extension tracks the format.
pub const DOWNLOAD_BASENAME: &str = "compressed_image";

/// A virtual download: everything the host page needs to hand the encoded
/// bytes to the browser's save-file flow (anchor `download` attribute, blob
/// type, blob contents).
#[derive(Debug, Clone)]
pub struct DownloadArtifact {
    file_name: String,
    media_type: &'static str,
    data: Vec<u8>,
}

impl DownloadArtifact {
    pub(crate) fn for_image(image: &CompressedImage) -> Self {
        Self {
            file_name: format!("{}.{}", DOWNLOAD_BASENAME, image.format().extension()),
            media_type: image.format().media_type(),
            data: image.data().to_vec(),
        }
    }

    /// `compressed_image.<ext>`, where `<ext>` is the format's MIME subtype.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn media_type(&self) -> &str {
        self.media_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
