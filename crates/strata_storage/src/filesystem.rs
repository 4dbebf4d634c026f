//! Filesystem-based storage implementation.
//!
//! Records are plain files grouped into one directory per owner. The owner
//! directory name is the SHA-256 of the owner id, so arbitrary owner ids
//! (emails, hashes) never reach the path.

use crate::KeyValueStore;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use strata_error::{StorageError, StorageErrorKind, StrataResult};
use uuid::Uuid;

/// Filesystem storage backend.
///
/// Layout: `{base_path}/{sha256(owner_id)}/{key}`
///
/// # Example Structure
///
/// ```text
/// /var/lib/strata/metadata/
/// ├── 9f86d081884c7d65.../
/// │   ├── 0b8c1c0e-2f7e-4a36-9d0f-6c6f5b0a3f11
/// │   └── 5a1f2b7e-8c3d-4e9a-b0c1-d2e3f4a5b6c7
/// └── 60303ae22b998861.../
///     └── 0b8c1c0e-2f7e-4a36-9d0f-6c6f5b0a3f11_v1
/// ```
///
/// # Features
///
/// - **Owner isolation**: one directory per owner, named by hash
/// - **Atomic writes**: temp file + rename per key
/// - **Safe keys**: only `[A-Za-z0-9._-]`, never starting with `.`
pub struct FileSystemStore {
    base_path: PathBuf,
}

impl FileSystemStore {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> StrataResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem storage");
        Ok(Self { base_path })
    }

    /// Root directory of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn owner_dir(&self, owner_id: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(owner_id.as_bytes());
        self.base_path.join(format!("{:x}", hasher.finalize()))
    }

    fn record_path(&self, owner_id: &str, key: &str) -> StrataResult<PathBuf> {
        validate_key(owner_id, key)?;
        Ok(self.owner_dir(owner_id).join(key))
    }
}

fn validate_key(owner_id: &str, key: &str) -> StrataResult<()> {
    let valid_key = !key.is_empty()
        && !key.starts_with('.')
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'));
    if owner_id.is_empty() || !valid_key {
        return Err(StorageError::new(StorageErrorKind::InvalidKey(format!(
            "owner '{}' / key '{}'",
            owner_id, key
        )))
        .into());
    }
    Ok(())
}

#[async_trait::async_trait]
impl KeyValueStore for FileSystemStore {
    #[tracing::instrument(skip(self, value), fields(size = value.len()))]
    async fn put(&self, owner_id: &str, key: &str, value: Vec<u8>) -> StrataResult<()> {
        let path = self.record_path(owner_id, key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Dot-prefixed temp names never collide with valid keys
        let temp_path = path.with_file_name(format!(".{}.{}.tmp", key, Uuid::new_v4()));
        tokio::fs::write(&temp_path, &value).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %path.display(), size = value.len(), "Stored record");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, owner_id: &str, key: &str) -> StrataResult<Option<Vec<u8>>> {
        let path = self.record_path(owner_id, key)?;

        match tokio::fs::read(&path).await {
            Ok(data) => {
                tracing::debug!(path = %path.display(), size = data.len(), "Read record");
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::Read(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, owner_id: &str, key: &str) -> StrataResult<()> {
        let path = self.record_path(owner_id, key)?;

        tokio::fs::remove_file(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(format!("{}/{}", owner_id, key)))
            } else {
                StorageError::new(StorageErrorKind::Delete(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        tracing::debug!(path = %path.display(), "Deleted record");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list_keys(&self, owner_id: &str) -> StrataResult<Vec<String>> {
        let dir = self.owner_dir(owner_id);
        let read_err = |e: std::io::Error| {
            StorageError::new(StorageErrorKind::Read(format!("{}: {}", dir.display(), e)))
        };

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(read_err(e).into()),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
            let file_name = entry.file_name();
            if let Some(name) = file_name.to_str()
                && !name.starts_with('.')
            {
                keys.push(name.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}
