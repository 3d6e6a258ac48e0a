//! Clinic logos travel as `data:` URLs so the letterhead is self-contained.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ExportError;

const ACCEPTED_TYPES: &[&str] = &["image/png", "image/jpeg", "image/gif", "image/svg+xml", "image/webp"];

/// Encode raw image bytes as a `data:` URL.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> Result<String, ExportError> {
    if !ACCEPTED_TYPES.contains(&mime) {
        return Err(ExportError::InvalidLogo(format!("unsupported image type {mime}")));
    }
    if bytes.is_empty() {
        return Err(ExportError::InvalidLogo("image is empty".to_string()));
    }
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Mime type for a logo file, judged by its extension.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Check that `url` is a well-formed base64 image `data:` URL and return its
/// mime type and decoded bytes.
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>), ExportError> {
    let rest = url
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| ExportError::InvalidLogo("not a data URL".to_string()))?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| ExportError::InvalidLogo("logo is not base64 encoded".to_string()))?;
    if !ACCEPTED_TYPES.contains(&mime) {
        return Err(ExportError::InvalidLogo(format!("unsupported image type {mime}")));
    }
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ExportError::InvalidLogo(e.to_string()))?;
    Ok((mime.to_string(), bytes))
}
