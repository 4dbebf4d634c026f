//! Backend selection.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which [`KeyValueStore`](crate::KeyValueStore) implementation to wire up.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local maps; contents vanish with the process
    #[default]
    #[display("memory")]
    Memory,
    /// Files under `data_dir`
    #[display("filesystem")]
    Filesystem,
}

/// Storage section of the Strata configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend to use
    #[serde(default)]
    pub backend: StorageBackend,
    /// Root directory for the filesystem backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./strata-data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}
