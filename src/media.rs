//! Image type helpers shared by upload and download paths.
//!
//! Uploads are typed from the filename extension (with the client-declared
//! content type as a fallback); downloads derive their extension from the
//! MIME type the generation service reported.

/// Map a filename to a supported image MIME type by its extension.
///
/// Returns `None` for unknown extensions or names without one.
pub fn mime_for_filename(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// File extension for a MIME type: the subtype as-is, or `png` when the
/// type has no usable subtype.
pub fn extension_for_mime(mime: &str) -> &str {
    match mime.split_once('/') {
        Some((_, subtype)) if !subtype.is_empty() => subtype,
        _ => "png",
    }
}

/// Suggested filename for a downloaded result image.
pub fn download_filename(brand: &str, mime: &str) -> String {
    format!("edited-image-by-{}.{}", brand, extension_for_mime(mime))
}
