//! Validation error types.

/// Construction-time validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// A required field was missing or empty
    #[display("Missing required field: {}", _0)]
    MissingField(&'static str),
    /// The content type is not one the format registry supports
    #[display("Unsupported content type: {}", _0)]
    UnsupportedType(String),
    /// A field held a value outside its domain
    #[display("Invalid value for '{}': {}", field, reason)]
    InvalidValue {
        /// Field that failed validation
        field: &'static str,
        /// Reason for failure
        reason: String,
    },
}

/// Validation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
