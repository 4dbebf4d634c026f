//! The table bundle handed to the fragment layer.

use crate::{FileSystemStore, KeyValueStore, MemoryStore, StorageBackend, StorageConfig};
use std::path::Path;
use std::sync::Arc;
use strata_error::StrataResult;

/// The three tables fragments are persisted in.
///
/// - `metadata`: fragment metadata JSON keyed by fragment id
/// - `content`: raw bytes keyed by fragment id or version id
/// - `versions`: version metadata JSON keyed by version id
#[derive(Clone)]
pub struct Stores {
    /// Fragment metadata table
    pub metadata: Arc<dyn KeyValueStore>,
    /// Raw content table (fragments and versions)
    pub content: Arc<dyn KeyValueStore>,
    /// Version metadata table
    pub versions: Arc<dyn KeyValueStore>,
}

impl Stores {
    /// Fresh, isolated in-memory tables.
    pub fn in_memory() -> Self {
        Self {
            metadata: Arc::new(MemoryStore::new()),
            content: Arc::new(MemoryStore::new()),
            versions: Arc::new(MemoryStore::new()),
        }
    }

    /// Filesystem tables under `root/{metadata,content,versions}`.
    ///
    /// # Errors
    ///
    /// Returns error if any table directory cannot be created.
    pub fn filesystem(root: impl AsRef<Path>) -> StrataResult<Self> {
        let root = root.as_ref();
        Ok(Self {
            metadata: Arc::new(FileSystemStore::new(root.join("metadata"))?),
            content: Arc::new(FileSystemStore::new(root.join("content"))?),
            versions: Arc::new(FileSystemStore::new(root.join("versions"))?),
        })
    }

    /// Build the tables named by the configuration.
    ///
    /// This is the only place the backend choice is made.
    #[tracing::instrument(skip(config), fields(backend = %config.backend))]
    pub fn from_config(config: &StorageConfig) -> StrataResult<Self> {
        let stores = match config.backend {
            StorageBackend::Memory => Self::in_memory(),
            StorageBackend::Filesystem => Self::filesystem(&config.data_dir)?,
        };
        tracing::info!(backend = stores.backend_name(), "Storage backend ready");
        Ok(stores)
    }

    /// Backend name of the metadata table.
    pub fn backend_name(&self) -> &'static str {
        self.metadata.backend_name()
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores")
            .field("backend", &self.backend_name())
            .finish()
    }
}
