//! Uploaded school images.
//!
//! An `ImagePayload` can only be built through the size gate, so a candidate
//! record never carries an image larger than `MAX_IMAGE_BYTES`.

use crate::domain::validation::{check_image_size, FieldError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Largest accepted image, in raw (decoded) bytes.
pub const MAX_IMAGE_BYTES: usize = 5_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    mime: String,
    base64: String,
    byte_len: usize,
}

impl ImagePayload {
    /// Accepts raw image bytes, e.g. the body of a file upload.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Result<Self, FieldError> {
        check_image_size(bytes.len())?;
        let mime = normalize_mime(mime)?;
        Ok(Self {
            mime,
            base64: STANDARD.encode(bytes),
            byte_len: bytes.len(),
        })
    }

    /// Accepts a `data:<mime>;base64,<data>` URL.
    pub fn from_data_url(url: &str) -> Result<Self, FieldError> {
        let rest = url
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| FieldError::image_format("expected a data URL"))?;
        let (header, data) = rest
            .split_once(',')
            .ok_or_else(|| FieldError::image_format("data URL has no payload"))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| FieldError::image_format("data URL must be base64 encoded"))?;
        let bytes = STANDARD
            .decode(data.as_bytes())
            .map_err(|_| FieldError::image_format("payload is not valid base64"))?;
        Self::from_bytes(mime, &bytes)
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// Lower-cased `type/subtype`; parameters such as `;charset=x` are dropped.
fn normalize_mime(mime: &str) -> Result<String, FieldError> {
    let essence = mime.split(';').next().unwrap_or_default();
    let mime = essence.trim().to_ascii_lowercase();
    match mime.strip_prefix("image/") {
        Some(subtype) if !subtype.is_empty() => Ok(mime),
        _ => Err(FieldError::image_format("file must be an image")),
    }
}
