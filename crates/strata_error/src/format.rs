//! Format error types.

/// Kinds of content-type and extension failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FormatErrorKind {
    /// The string is not a valid MIME type
    #[display("Malformed content type: {}", _0)]
    MalformedType(String),
    /// The base type is not in the registry
    #[display("Unsupported content type: {}", _0)]
    UnsupportedType(String),
    /// The fragment type cannot be converted to the requested extension
    #[display("Cannot convert {} to .{}", source_type, extension)]
    UnsupportedConversion {
        /// Content type of the stored fragment
        source_type: String,
        /// Requested target extension
        extension: String,
    },
}

/// Format error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Format Error: {} at line {} in {}", kind, line, file)]
pub struct FormatError {
    /// The kind of error that occurred
    pub kind: FormatErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FormatError {
    /// Create a new format error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FormatErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
