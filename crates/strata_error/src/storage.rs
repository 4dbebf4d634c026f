//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a record
    #[display("Failed to write record: {}", _0)]
    Write(String),
    /// Failed to read a record
    #[display("Failed to read record: {}", _0)]
    Read(String),
    /// Failed to delete a record
    #[display("Failed to delete record: {}", _0)]
    Delete(String),
    /// Record not found under the given key
    #[display("Record not found: {}", _0)]
    NotFound(String),
    /// Key contains characters the backend cannot store
    #[display("Invalid storage key: {}", _0)]
    InvalidKey(String),
    /// Stored bytes no longer decode as the expected record
    #[display("Corrupt record: {}", _0)]
    Corrupt(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use strata_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("owner/abc".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
