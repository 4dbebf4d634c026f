//! Extension and content type lookup tables.

use crate::{FormatFamily, MediaType};
use strata_error::FormatError;
use strum::IntoEnumIterator;

/// MIME type reported for unrecognised extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Strip parameters from a content type.
///
/// # Errors
///
/// Returns a `FormatError` when the value is not a valid MIME type.
pub fn base_type(value: &str) -> Result<String, FormatError> {
    MediaType::parse(value).map(|mt| mt.essence().to_string())
}

/// Whether the content type names a supported base type.
///
/// Never fails: malformed values are simply unsupported.
#[tracing::instrument(level = "trace")]
pub fn is_supported_type(value: &str) -> bool {
    match MediaType::parse(value) {
        Ok(mt) => FormatFamily::from_base_type(mt.essence()).is_some(),
        Err(e) => {
            tracing::trace!(error = %e, "Rejecting malformed content type");
            false
        }
    }
}

/// Every base type fragments may be created with, grouped by family order.
pub fn supported_types() -> Vec<&'static str> {
    FormatFamily::iter()
        .flat_map(|family| family.base_types().iter().copied())
        .collect()
}

/// Extensions a base type may be converted to; empty for unknown types.
pub fn supported_formats(base: &str) -> &'static [&'static str] {
    FormatFamily::from_base_type(base)
        .map(|family| family.targets())
        .unwrap_or(&[])
}

/// Lowercase an extension and drop a leading dot.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

/// Canonical MIME type for an extension.
///
/// Unknown extensions map to [`OCTET_STREAM`].
pub fn mime_for_extension(ext: &str) -> &'static str {
    match normalize_extension(ext).as_str() {
        "txt" => "text/plain",
        "md" => "text/markdown",
        "html" => "text/html",
        "csv" => "text/csv",
        "json" => "application/json",
        "yaml" | "yml" => "application/yaml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "avif" => "image/avif",
        _ => OCTET_STREAM,
    }
}
