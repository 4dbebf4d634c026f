//! Format registry for Strata fragments.
//!
//! Maps content types to the extensions their content may be converted to,
//! and extensions back to their canonical MIME type.
//!
//! # Example
//!
//! ```rust
//! use strata_formats::{is_supported_type, mime_for_extension, supported_formats};
//!
//! assert!(is_supported_type("text/markdown; charset=utf-8"));
//! assert_eq!(supported_formats("text/markdown"), &["md", "html", "txt"]);
//! assert_eq!(mime_for_extension("yml"), "application/yaml");
//! assert_eq!(mime_for_extension("exe"), "application/octet-stream");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod family;
mod media_type;
mod registry;

pub use family::FormatFamily;
pub use media_type::MediaType;
pub use registry::{
    OCTET_STREAM, base_type, is_supported_type, mime_for_extension, normalize_extension,
    supported_formats, supported_types,
};
