//! Strata - owned, typed content fragments with version history
//!
//! Strata stores opaque byte payloads ("fragments") per owner, keeps a
//! numbered history of every content replacement, and converts content into
//! related formats when it is read.
//!
//! # Architecture
//!
//! Strata is organized as a workspace with focused crates:
//!
//! - `strata_error` - Error types
//! - `strata_formats` - Media type parsing and the format registry
//! - `strata_convert` - Format conversion engine
//! - `strata_storage` - Owner-partitioned key-value backends
//! - `strata_fragment` - Fragments, versions and the read path
//!
//! This crate (`strata`) re-exports everything for convenience and adds
//! layered configuration and logging setup.
//!
//! # Quick Start
//!
//! ```rust
//! use strata::{StorageBackend, StrataConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = StrataConfig::default();
//! config.storage.backend = StorageBackend::Memory;
//!
//! let fragments = config.fragment_store()?;
//! let fragment = fragments
//!     .create("owner-1", "application/json", br#"{"name":"Test"}"#.to_vec())
//!     .await?;
//!
//! let yaml = fragments.read_as(&fragment, Some("yaml")).await?;
//! assert_eq!(yaml.content_type, "application/yaml");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod telemetry;

pub use crate::config::{LoggingConfig, StrataConfig};
pub use telemetry::init_tracing;

// Re-export error types
pub use strata_error::{
    ConfigError, ConversionError, FormatError, FormatErrorKind, JsonError, StorageError,
    StorageErrorKind, StrataError, StrataErrorKind, StrataResult, ValidationError,
    ValidationErrorKind, VersionError, VersionErrorKind,
};

// Re-export formats
pub use strata_formats::{
    FormatFamily, MediaType, OCTET_STREAM, base_type, is_supported_type, mime_for_extension,
    normalize_extension, supported_formats, supported_types,
};

// Re-export conversion
pub use strata_convert::convert;

// Re-export storage
pub use strata_storage::{
    FileSystemStore, KeyValueStore, MemoryStore, StorageBackend, StorageConfig, Stores,
};

// Re-export fragments
pub use strata_fragment::{
    Fragment, FragmentBuilder, FragmentContent, FragmentStore, FragmentVersion, VersionData,
    VersionManager, VersionRef, parse_version_id, to_version_id,
};
