//! In-process storage backend.

use crate::KeyValueStore;
use std::collections::{BTreeMap, HashMap};
use strata_error::{StorageError, StorageErrorKind, StrataResult};
use tokio::sync::RwLock;

/// In-memory storage backend.
///
/// Each instance owns its own map; nothing is process-global. Values are
/// cloned out on `get`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    partitions: RwLock<HashMap<String, BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn validate(owner_id: &str, key: &str) -> StrataResult<()> {
    if owner_id.is_empty() || key.is_empty() {
        return Err(StorageError::new(StorageErrorKind::InvalidKey(format!(
            "owner '{}' / key '{}' must be non-empty",
            owner_id, key
        )))
        .into());
    }
    Ok(())
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    #[tracing::instrument(skip(self, value), fields(size = value.len()))]
    async fn put(&self, owner_id: &str, key: &str, value: Vec<u8>) -> StrataResult<()> {
        validate(owner_id, key)?;
        self.partitions
            .write()
            .await
            .entry(owner_id.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, owner_id: &str, key: &str) -> StrataResult<Option<Vec<u8>>> {
        validate(owner_id, key)?;
        Ok(self
            .partitions
            .read()
            .await
            .get(owner_id)
            .and_then(|partition| partition.get(key))
            .cloned())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, owner_id: &str, key: &str) -> StrataResult<()> {
        validate(owner_id, key)?;
        let mut partitions = self.partitions.write().await;
        let removed = partitions
            .get_mut(owner_id)
            .and_then(|partition| partition.remove(key));
        if removed.is_none() {
            return Err(StorageError::new(StorageErrorKind::NotFound(format!(
                "{}/{}",
                owner_id, key
            )))
            .into());
        }
        if partitions.get(owner_id).is_some_and(BTreeMap::is_empty) {
            partitions.remove(owner_id);
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list_keys(&self, owner_id: &str) -> StrataResult<Vec<String>> {
        Ok(self
            .partitions
            .read()
            .await
            .get(owner_id)
            .map(|partition| partition.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
