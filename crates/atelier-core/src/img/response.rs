//! Response types for image generation.

use bytes::Bytes;

/// Decoded image bytes returned by a generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageResponse {
    /// Raw image bytes, already base64-decoded.
    pub data: Bytes,
    /// MIME type reported by the backend.
    pub mime_type: String,
}

impl ImageResponse {
    /// Creates a response from raw bytes.
    pub fn new(data: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Returns the image size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
