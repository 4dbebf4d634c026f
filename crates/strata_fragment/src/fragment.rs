//! The fragment metadata record.

use crate::version_id::SEPARATOR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strata_error::{StrataResult, ValidationError, ValidationErrorKind};
use strata_formats::{MediaType, normalize_extension, supported_formats};
use uuid::Uuid;

/// Metadata for one owned unit of typed content.
///
/// The bytes themselves live in the content table, keyed by `id`. `owner_id`
/// and `content_type` never change after construction; `size` tracks the
/// length of the last content write.
///
/// # Examples
///
/// ```
/// use strata_fragment::Fragment;
///
/// let fragment = Fragment::new("owner-1", "text/plain; charset=utf-8", 0).unwrap();
/// assert_eq!(fragment.mime_type(), "text/plain");
/// assert!(fragment.is_text());
/// assert_eq!(fragment.formats(), &["txt"]);
///
/// assert!(Fragment::new("owner-1", "application/msword", 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    /// Unique identifier
    id: String,
    /// Owner partition
    #[serde(default)]
    owner_id: String,
    /// Full content type, parameters included
    #[serde(rename = "type")]
    content_type: String,
    /// Byte length of the current content
    size: u64,
    /// Creation time
    created: DateTime<Utc>,
    /// Last metadata or content change
    updated: DateTime<Utc>,
}

impl Fragment {
    /// Create a fragment with a fresh id and current timestamps.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if `owner_id` is empty or the content
    /// type is missing or unsupported.
    pub fn new(
        owner_id: impl Into<String>,
        content_type: impl Into<String>,
        size: u64,
    ) -> StrataResult<Self> {
        Self::builder()
            .owner_id(owner_id)
            .content_type(content_type)
            .size(size)
            .build()
    }

    /// Creates a new fragment builder.
    pub fn builder() -> FragmentBuilder {
        FragmentBuilder::default()
    }

    /// Whether `value` is a content type fragments may be created with.
    ///
    /// Never fails; malformed types are simply unsupported.
    pub fn is_supported_type(value: &str) -> bool {
        strata_formats::is_supported_type(value)
    }

    /// Content type with parameters stripped.
    pub fn mime_type(&self) -> String {
        MediaType::parse(&self.content_type)
            .map(|mt| mt.essence().to_string())
            .unwrap_or_else(|_| self.content_type.clone())
    }

    /// Whether the content is a `text/*` type.
    pub fn is_text(&self) -> bool {
        self.mime_type().starts_with("text/")
    }

    /// Extensions this fragment can be served as.
    pub fn formats(&self) -> &'static [&'static str] {
        supported_formats(&self.mime_type())
    }

    /// Whether this fragment may be served with the given extension.
    ///
    /// `text/plain` is only ever served as `txt`, whatever the registry says.
    pub fn can_convert_to(&self, extension: &str) -> bool {
        can_convert(&self.content_type, extension)
    }

    /// Refresh `updated` to now.
    pub fn touch(&mut self) {
        self.updated = Utc::now();
    }

    pub(crate) fn set_size(&mut self, size: u64) {
        self.size = size;
    }

    /// Re-check the construction invariants on a reconstructed record.
    pub(crate) fn validate(&self) -> StrataResult<()> {
        check(&self.id, &self.owner_id, &self.content_type)
    }

    /// Adopt the owner id when the persisted record omitted it.
    pub(crate) fn with_default_owner(mut self, owner_id: &str) -> Self {
        if self.owner_id.is_empty() {
            self.owner_id = owner_id.to_string();
        }
        self
    }
}

/// Conversion gate shared by fragments and their versions.
pub(crate) fn can_convert(content_type: &str, extension: &str) -> bool {
    let Ok(mt) = MediaType::parse(content_type) else {
        return false;
    };
    let ext = normalize_extension(extension);
    if mt.essence() == "text/plain" {
        return ext == "txt";
    }
    supported_formats(mt.essence()).contains(&ext.as_str())
}

fn check(id: &str, owner_id: &str, content_type: &str) -> StrataResult<()> {
    if id.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::MissingField("id")).into());
    }
    // Version records share the content table under `<id>_v<n>`.
    if id.contains(SEPARATOR) {
        return Err(ValidationError::new(ValidationErrorKind::InvalidValue {
            field: "id",
            reason: format!("'{}' must not contain '{}'", id, SEPARATOR),
        })
        .into());
    }
    if owner_id.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::MissingField("ownerId")).into());
    }
    if content_type.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::MissingField("type")).into());
    }
    if !strata_formats::is_supported_type(content_type) {
        return Err(ValidationError::new(ValidationErrorKind::UnsupportedType(
            content_type.to_string(),
        ))
        .into());
    }
    Ok(())
}

/// Builder for `Fragment`.
///
/// `id`, `created` and `updated` are optional and default to a new UUID and
/// the current time.
#[derive(Debug, Default)]
pub struct FragmentBuilder {
    id: Option<String>,
    owner_id: Option<String>,
    content_type: Option<String>,
    size: Option<u64>,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
}

impl FragmentBuilder {
    /// Sets the fragment id. It must not contain `_v`.
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    /// Sets the owner id.
    pub fn owner_id(mut self, value: impl Into<String>) -> Self {
        self.owner_id = Some(value.into());
        self
    }

    /// Sets the content type.
    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    /// Sets the content size.
    pub fn size(mut self, value: u64) -> Self {
        self.size = Some(value);
        self
    }

    /// Sets the creation time.
    pub fn created(mut self, value: DateTime<Utc>) -> Self {
        self.created = Some(value);
        self
    }

    /// Sets the last-updated time.
    pub fn updated(mut self, value: DateTime<Utc>) -> Self {
        self.updated = Some(value);
        self
    }

    /// Builds the `Fragment`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first missing or invalid field.
    /// Nothing is constructed on failure.
    pub fn build(self) -> StrataResult<Fragment> {
        let owner_id = self.owner_id.unwrap_or_default();
        let content_type = self.content_type.unwrap_or_default();
        let id = self.id.unwrap_or_else(|| Uuid::new_v4().to_string());

        check(&id, &owner_id, &content_type)?;
        let size = self
            .size
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingField("size")))?;

        let now = Utc::now();
        Ok(Fragment {
            id,
            owner_id,
            content_type,
            size,
            created: self.created.unwrap_or(now),
            updated: self.updated.unwrap_or(now),
        })
    }
}
