//! Record encoding errors.

/// A record or command result that could not be written out as JSON.
///
/// Bytes that fail to decode on the way back in are a corrupt record and
/// surface as a storage error instead.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Encoding Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// What the serializer reported
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl JsonError {
    /// Record an encoding failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_error::{JsonError, StrataError};
    ///
    /// let err: StrataError = JsonError::new("key must be a string").into();
    /// assert!(err.to_string().contains("Encoding Error"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
