//! Top-level error wrapper types.

use crate::{
    ConfigError, ConversionError, FormatError, JsonError, StorageError, StorageErrorKind,
    ValidationError, VersionError, VersionErrorKind,
};

/// Every error condition a Strata operation can report.
///
/// # Examples
///
/// ```
/// use strata_error::{StrataError, ConversionError};
///
/// let err: StrataError = ConversionError::new("text/csv", "json", "bad row").into();
/// assert!(format!("{}", err).contains("bad row"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StrataErrorKind {
    /// Storage adapter failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Entity construction failed validation
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Unsupported or malformed content type / extension
    #[from(FormatError)]
    Format(FormatError),
    /// Content conversion failed
    #[from(ConversionError)]
    Conversion(ConversionError),
    /// Version id or version lifecycle failure
    #[from(VersionError)]
    Version(VersionError),
    /// Record encoding failure
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Strata error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Strata Error: {}", _0)]
pub struct StrataError(Box<StrataErrorKind>);

impl StrataError {
    /// Create a new error from a kind.
    pub fn new(kind: StrataErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StrataErrorKind {
        &self.0
    }

    /// True when the error means "the record does not exist".
    ///
    /// Covers storage misses and the `restore` path's missing version data.
    pub fn is_not_found(&self) -> bool {
        match self.kind() {
            StrataErrorKind::Storage(e) => matches!(e.kind, StorageErrorKind::NotFound(_)),
            StrataErrorKind::Version(e) => {
                matches!(e.kind, VersionErrorKind::DataNotFound(_))
            }
            _ => false,
        }
    }

    /// True for errors the ingress layer should answer with a client error.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind(),
            StrataErrorKind::Validation(_) | StrataErrorKind::Format(_)
        ) || matches!(
            self.kind(),
            StrataErrorKind::Version(e) if !matches!(e.kind, VersionErrorKind::DataNotFound(_))
        )
    }
}

// Generic From implementation for any type that converts to StrataErrorKind
impl<T> From<T> for StrataError
where
    T: Into<StrataErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Strata operations.
pub type StrataResult<T> = std::result::Result<T, StrataError>;
