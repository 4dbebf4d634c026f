//! The version metadata record.

use crate::{Fragment, to_version_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strata_error::{StrataResult, ValidationError, ValidationErrorKind};

/// An immutable snapshot of a fragment's metadata at the moment its content
/// was replaced. The snapshot's bytes live in the content table under `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct FragmentVersion {
    /// `<fragmentId>_v<versionNum>`
    id: String,
    /// Fragment this version belongs to
    fragment_id: String,
    /// Owner partition, copied from the fragment
    owner_id: String,
    /// Content type at snapshot time
    #[serde(rename = "type")]
    content_type: String,
    /// Content size at snapshot time
    size: u64,
    /// Position in the chain, starting at 1
    version_num: u32,
    /// When the snapshot was taken
    created: DateTime<Utc>,
    /// When the captured content was last written
    updated: DateTime<Utc>,
}

impl FragmentVersion {
    /// Capture `fragment`'s current metadata as version `version_num`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if `version_num` is zero.
    pub fn capture(fragment: &Fragment, version_num: u32) -> StrataResult<Self> {
        let version = Self {
            id: to_version_id(fragment.id(), version_num),
            fragment_id: fragment.id().clone(),
            owner_id: fragment.owner_id().clone(),
            content_type: fragment.content_type().clone(),
            size: *fragment.size(),
            version_num,
            created: Utc::now(),
            updated: *fragment.updated(),
        };
        version.validate()?;
        Ok(version)
    }

    /// Whether this version's content may be served with the given extension.
    pub fn can_convert_to(&self, extension: &str) -> bool {
        crate::fragment::can_convert(&self.content_type, extension)
    }

    pub(crate) fn validate(&self) -> StrataResult<()> {
        if self.fragment_id.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingField("fragmentId")).into());
        }
        if self.owner_id.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingField("ownerId")).into());
        }
        if self.content_type.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingField("type")).into());
        }
        if self.version_num == 0 {
            return Err(ValidationError::new(ValidationErrorKind::InvalidValue {
                field: "versionNum",
                reason: "must be a positive integer".to_string(),
            })
            .into());
        }
        if self.id != to_version_id(&self.fragment_id, self.version_num) {
            return Err(ValidationError::new(ValidationErrorKind::InvalidValue {
                field: "id",
                reason: format!("'{}' does not match fragment and version number", self.id),
            })
            .into());
        }
        Ok(())
    }
}
