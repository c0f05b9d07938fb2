//! Image intake: turns an image file into a self-contained `data:` URL so the
//! catalog never references anything outside itself.
//!
//! The payload is opaque to the store. Nothing here resizes or re-encodes images;
//! the bytes go in and come back out untouched.

use crate::error::{GarageError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use std::path::Path;

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("avif", "image/avif"),
];

/// MIME type for an image path, judged by extension (case-insensitive).
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

/// File extension to use when writing an image of the given MIME type back out.
pub fn extension_for_mime(mime: &str) -> Option<&'static str> {
    IMAGE_TYPES
        .iter()
        .find(|(_, known)| known.eq_ignore_ascii_case(mime))
        .map(|(ext, _)| *ext)
}

pub fn encode_image(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Reads the whole file and encodes it. Non-image extensions are rejected before
/// the file is opened.
pub fn encode_image_file(path: &Path) -> Result<String> {
    let mime = mime_for_path(path).ok_or_else(|| {
        GarageError::UnsupportedFile(format!("{} is not a recognized image", path.display()))
    })?;
    let bytes = fs::read(path).map_err(GarageError::Io)?;
    Ok(encode_image(&bytes, mime))
}

/// A decoded `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Reverses [`encode_image`]. Only base64 data URLs are understood.
pub fn decode_data_url(url: &str) -> Result<DecodedImage> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| GarageError::Api("Photo is not a data URL".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| GarageError::Api("Photo data URL has no payload".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| GarageError::Api("Photo data URL is not base64 encoded".to_string()))?;
    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| GarageError::Api(format!("Photo payload is not valid base64: {}", e)))?;
    Ok(DecodedImage {
        mime: mime.to_string(),
        bytes,
    })
}
