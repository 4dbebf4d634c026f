//! Error types for the Strata fragment store.
//!
//! This crate provides the error types shared by every Strata crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use strata_error::{StrataResult, ValidationError, ValidationErrorKind};
//!
//! fn build() -> StrataResult<()> {
//!     Err(ValidationError::new(ValidationErrorKind::MissingField("ownerId")))?
//! }
//!
//! assert!(build().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod conversion;
mod error;
mod format;
mod json;
mod storage;
mod validation;
mod version;

pub use config::ConfigError;
pub use conversion::ConversionError;
pub use error::{StrataError, StrataErrorKind, StrataResult};
pub use format::{FormatError, FormatErrorKind};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
pub use version::{VersionError, VersionErrorKind};
