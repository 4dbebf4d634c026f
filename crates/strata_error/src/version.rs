//! Version error types.

/// Kinds of version id and version lifecycle failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum VersionErrorKind {
    /// The id lacks the `_v<number>` suffix
    #[display("Malformed version id: {}", _0)]
    MalformedId(String),
    /// The suffix after `_v` is not a positive integer
    #[display("Invalid version number in id: {}", _0)]
    InvalidNumber(String),
    /// The version id names a different fragment
    #[display("Version {} does not belong to fragment {}", version_id, fragment_id)]
    FragmentMismatch {
        /// Version id supplied by the caller
        version_id: String,
        /// Fragment the caller claimed it belongs to
        fragment_id: String,
    },
    /// Version content is missing
    #[display("Version data not found: {}", _0)]
    DataNotFound(String),
}

/// Version error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Version Error: {} at line {} in {}", kind, line, file)]
pub struct VersionError {
    /// The kind of error that occurred
    pub kind: VersionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl VersionError {
    /// Create a new version error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VersionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
