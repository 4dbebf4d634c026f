//! Conversion error types.

/// Any failure inside the converter, wrapped with the original message.
///
/// # Examples
///
/// ```
/// use strata_error::ConversionError;
///
/// let err = ConversionError::new("application/json", "yaml", "expected value at line 1");
/// assert_eq!(err.message, "expected value at line 1");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Conversion Error: {} -> .{} failed: {} at line {} in {}",
    source_type,
    extension,
    message,
    line,
    file
)]
pub struct ConversionError {
    /// Base content type being converted
    pub source_type: String,
    /// Requested target extension
    pub extension: String,
    /// The underlying failure message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConversionError {
    /// Create a new conversion error at the current location.
    #[track_caller]
    pub fn new(
        source_type: impl Into<String>,
        extension: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let location = std::panic::Location::caller();
        Self {
            source_type: source_type.into(),
            extension: extension.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
