//! Preview payload normalization.
//!
//! Stored previews come in three shapes: full data URLs, bare base64
//! payloads with no declared MIME type, and remote references. Handlers
//! always serve a self-describing value, so bare payloads are wrapped
//! into a data URL here.

use crate::status::{FILE_AUDIO, FILE_DOCUMENT, FILE_IMAGE, FILE_VIDEO};

/// Fallback MIME type for previews whose media row carries none.
pub fn default_mime_type(file_type: &str) -> &'static str {
    match file_type {
        FILE_IMAGE => "image/jpeg",
        FILE_VIDEO => "video/mp4",
        FILE_AUDIO => "audio/mpeg",
        FILE_DOCUMENT => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Whether the stored value is a reference to external content rather
/// than an inline payload.
fn is_reference(value: &str) -> bool {
    value.contains("://") || value.starts_with("blob:") || value.starts_with("//")
}

/// Normalize a stored preview value into a self-describing form.
///
/// - `data:` URLs and URL-like references pass through unchanged.
/// - Anything else is treated as a bare base64 payload and wrapped as
///   `data:<mime>;base64,<payload>`, preferring the stored MIME type over
///   the per-file-type default.
pub fn normalize_preview(raw: &str, mime_type: Option<&str>, file_type: &str) -> String {
    if raw.starts_with("data:") || is_reference(raw) {
        return raw.to_string();
    }
    let mime = mime_type
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| default_mime_type(file_type));
    format!("data:{mime};base64,{raw}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_passes_through() {
        let raw = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(normalize_preview(raw, None, FILE_IMAGE), raw);
    }

    #[test]
    fn test_remote_reference_passes_through() {
        for raw in [
            "https://cdn.example.com/previews/s1.jpg",
            "http://example.com/a.png",
            "blob:abc-123",
            "//cdn.example.com/s1.jpg",
        ] {
            assert_eq!(normalize_preview(raw, None, FILE_IMAGE), raw);
        }
    }

    #[test]
    fn test_bare_payload_wrapped_with_stored_mime() {
        let out = normalize_preview("iVBORw0KGgo=", Some("image/png"), FILE_IMAGE);
        assert_eq!(out, "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_bare_image_payload_defaults_to_jpeg() {
        let out = normalize_preview("/9j/4AAQSkZJRg==", None, FILE_IMAGE);
        assert_eq!(out, "data:image/jpeg;base64,/9j/4AAQSkZJRg==");
    }

    #[test]
    fn test_empty_stored_mime_falls_back_to_default() {
        let out = normalize_preview("JVBERi0xLjQ=", Some(""), FILE_DOCUMENT);
        assert_eq!(out, "data:application/pdf;base64,JVBERi0xLjQ=");
    }

    #[test]
    fn test_default_mime_per_file_type() {
        assert_eq!(default_mime_type(FILE_IMAGE), "image/jpeg");
        assert_eq!(default_mime_type(FILE_VIDEO), "video/mp4");
        assert_eq!(default_mime_type(FILE_AUDIO), "audio/mpeg");
        assert_eq!(default_mime_type(FILE_DOCUMENT), "application/pdf");
    }
}
