//! Supported content type families.

use serde::{Deserialize, Serialize};

/// A closed set of content families the converter knows how to handle.
///
/// Every supported base MIME type belongs to exactly one family; the family
/// decides which extensions its content may be converted to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum FormatFamily {
    /// `text/plain`
    #[display("plain_text")]
    PlainText,
    /// `text/markdown`
    #[display("markdown")]
    Markdown,
    /// `text/html`
    #[display("html")]
    Html,
    /// `text/csv`
    #[display("csv")]
    Csv,
    /// `application/json`
    #[display("json")]
    Json,
    /// `application/yaml`
    #[display("yaml")]
    Yaml,
    /// `image/png`, `image/jpeg`, `image/webp`, `image/gif`, `image/avif`
    #[display("image")]
    Image,
}

const IMAGE_TARGETS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "avif"];

impl FormatFamily {
    /// Resolve the family for a base MIME type (parameters already stripped).
    pub fn from_base_type(base: &str) -> Option<Self> {
        match base {
            "text/plain" => Some(Self::PlainText),
            "text/markdown" => Some(Self::Markdown),
            "text/html" => Some(Self::Html),
            "text/csv" => Some(Self::Csv),
            "application/json" => Some(Self::Json),
            "application/yaml" => Some(Self::Yaml),
            "image/png" | "image/jpeg" | "image/webp" | "image/gif" | "image/avif" => {
                Some(Self::Image)
            }
            _ => None,
        }
    }

    /// Base MIME types belonging to this family.
    pub fn base_types(&self) -> &'static [&'static str] {
        match self {
            Self::PlainText => &["text/plain"],
            Self::Markdown => &["text/markdown"],
            Self::Html => &["text/html"],
            Self::Csv => &["text/csv"],
            Self::Json => &["application/json"],
            Self::Yaml => &["application/yaml"],
            Self::Image => &[
                "image/png",
                "image/jpeg",
                "image/webp",
                "image/gif",
                "image/avif",
            ],
        }
    }

    /// Extensions content of this family may be converted to.
    pub fn targets(&self) -> &'static [&'static str] {
        match self {
            Self::PlainText => &["txt"],
            Self::Markdown => &["md", "html", "txt"],
            Self::Html => &["html", "txt"],
            Self::Csv => &["csv", "txt", "json"],
            Self::Json => &["json", "txt", "yaml", "yml"],
            Self::Yaml => &["yaml", "yml", "json", "txt"],
            Self::Image => IMAGE_TARGETS,
        }
    }
}
