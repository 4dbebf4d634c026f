//! Version history for fragments.
//!
//! Versions form an append-only chain per `(owner_id, fragment_id)`. Nothing
//! here mutates fragment metadata; restoring is a content write the
//! [`FragmentStore`](crate::FragmentStore) performs with bytes fetched here.

use crate::codec::{decode, encode};
use crate::{Fragment, FragmentVersion, parse_version_id};
use std::sync::Arc;
use strata_error::{
    StorageError, StorageErrorKind, StrataResult, VersionError, VersionErrorKind,
};
use strata_storage::{KeyValueStore, Stores};

/// A fetched version: its metadata and its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionData {
    /// Version metadata
    pub metadata: FragmentVersion,
    /// Content captured by the version
    pub data: Vec<u8>,
}

/// Creates, lists, fetches and deletes fragment versions.
#[derive(Clone)]
pub struct VersionManager {
    versions: Arc<dyn KeyValueStore>,
    content: Arc<dyn KeyValueStore>,
}

impl VersionManager {
    /// Create a version manager over the `versions` and `content` tables.
    pub fn new(stores: &Stores) -> Self {
        Self {
            versions: Arc::clone(&stores.versions),
            content: Arc::clone(&stores.content),
        }
    }

    /// Version ids belonging to `fragment_id`, with their numbers, unsorted.
    async fn version_keys(&self, owner_id: &str, fragment_id: &str) -> StrataResult<Vec<(String, u32)>> {
        Ok(self
            .versions
            .list_keys(owner_id)
            .await?
            .into_iter()
            .filter_map(|key| {
                let parsed = parse_version_id(&key).ok()?;
                (parsed.fragment_id == fragment_id).then_some((key, parsed.version_num))
            })
            .collect())
    }

    /// Highest version number of the fragment, 0 when it has none.
    #[tracing::instrument(skip(self))]
    pub async fn latest_version_num(&self, owner_id: &str, fragment_id: &str) -> StrataResult<u32> {
        Ok(self
            .version_keys(owner_id, fragment_id)
            .await?
            .into_iter()
            .map(|(_, num)| num)
            .max()
            .unwrap_or(0))
    }

    /// Capture the fragment's current content as the next version.
    ///
    /// Persists the version metadata, then its bytes. A failure at any step
    /// propagates and nothing already written is rolled back.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the current content is missing or any
    /// read or write fails.
    #[tracing::instrument(skip(self, fragment), fields(owner_id = %fragment.owner_id(), fragment_id = %fragment.id()))]
    pub async fn snapshot(&self, fragment: &Fragment) -> StrataResult<FragmentVersion> {
        let owner_id = fragment.owner_id();
        let current = self
            .content
            .get(owner_id, fragment.id())
            .await?
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::NotFound(format!(
                    "content for fragment {}",
                    fragment.id()
                )))
            })?;

        let next = self.latest_version_num(owner_id, fragment.id()).await? + 1;
        let version = FragmentVersion::capture(fragment, next)?;

        self.versions
            .put(owner_id, version.id(), encode(&version)?)
            .await?;
        self.content.put(owner_id, version.id(), current).await?;

        tracing::info!(version_id = %version.id(), size = version.size(), "Created version");
        Ok(version)
    }

    /// Version ids of the fragment, newest first.
    ///
    /// Never fails: listing errors yield an empty list.
    #[tracing::instrument(skip(self))]
    pub async fn list_ids(&self, owner_id: &str, fragment_id: &str) -> Vec<String> {
        match self.version_keys(owner_id, fragment_id).await {
            Ok(mut keys) => {
                keys.sort_by(|a, b| b.1.cmp(&a.1));
                keys.into_iter().map(|(key, _)| key).collect()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to list versions");
                Vec::new()
            }
        }
    }

    /// Full version records of the fragment, newest first.
    ///
    /// Never fails: listing errors yield an empty list and unreadable records
    /// are skipped.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, owner_id: &str, fragment_id: &str) -> Vec<FragmentVersion> {
        let mut records = Vec::new();
        for id in self.list_ids(owner_id, fragment_id).await {
            match self.load_metadata(owner_id, &id).await {
                Ok(Some(version)) => records.push(version),
                Ok(None) => {}
                Err(e) => tracing::warn!(version_id = %id, error = %e, "Skipping unreadable version"),
            }
        }
        records.sort_by(|a, b| b.version_num().cmp(a.version_num()));
        records
    }

    /// Fetch a version's metadata and bytes.
    ///
    /// Returns `None` when the id is malformed, names another fragment, or
    /// has no metadata.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the metadata exists but its bytes cannot be
    /// read.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(
        &self,
        owner_id: &str,
        fragment_id: &str,
        version_id: &str,
    ) -> StrataResult<Option<VersionData>> {
        if let Err(e) = check_ownership(fragment_id, version_id) {
            tracing::debug!(error = %e, "Version id rejected");
            return Ok(None);
        }

        let metadata = match self.load_metadata(owner_id, version_id).await {
            Ok(Some(metadata)) => metadata,
            Ok(None) => return Ok(None),
            Err(e) => {
                tracing::warn!(error = %e, "Version metadata read failed, treating as not found");
                return Ok(None);
            }
        };

        let data = self.content.get(owner_id, version_id).await?.ok_or_else(|| {
            StorageError::new(StorageErrorKind::Read(format!(
                "version {} has metadata but no content",
                version_id
            )))
        })?;

        Ok(Some(VersionData { metadata, data }))
    }

    /// Bytes to restore `fragment` to, after validating `version_id`.
    ///
    /// # Errors
    ///
    /// - `MalformedId` / `InvalidNumber` for an unparsable id
    /// - `FragmentMismatch` when the id names another fragment
    /// - `DataNotFound` when the version has no stored bytes
    #[tracing::instrument(skip(self, fragment), fields(fragment_id = %fragment.id()))]
    pub async fn restore_data(&self, fragment: &Fragment, version_id: &str) -> StrataResult<Vec<u8>> {
        check_ownership(fragment.id(), version_id)?;
        self.content
            .get(fragment.owner_id(), version_id)
            .await?
            .ok_or_else(|| {
                VersionError::new(VersionErrorKind::DataNotFound(version_id.to_string())).into()
            })
    }

    /// Delete one version's metadata and bytes.
    ///
    /// # Errors
    ///
    /// Fails like [`restore_data`](Self::restore_data) on a bad id, and
    /// propagates storage errors, including not-found.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, owner_id: &str, fragment_id: &str, version_id: &str) -> StrataResult<()> {
        check_ownership(fragment_id, version_id)?;
        self.versions.delete(owner_id, version_id).await?;
        self.content.delete(owner_id, version_id).await?;
        tracing::info!("Deleted version");
        Ok(())
    }

    /// Delete every version of a fragment. Records already gone are skipped.
    ///
    /// # Returns
    ///
    /// Number of versions found.
    #[tracing::instrument(skip(self))]
    pub async fn remove_all(&self, owner_id: &str, fragment_id: &str) -> StrataResult<usize> {
        let keys = self.version_keys(owner_id, fragment_id).await?;
        for (key, _) in &keys {
            for table in [&self.versions, &self.content] {
                match table.delete(owner_id, key).await {
                    Ok(()) => {}
                    Err(e) if e.is_not_found() => {
                        tracing::debug!(version_id = %key, "Version record already gone");
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        tracing::info!(count = keys.len(), "Deleted fragment versions");
        Ok(keys.len())
    }

    async fn load_metadata(&self, owner_id: &str, version_id: &str) -> StrataResult<Option<FragmentVersion>> {
        let Some(bytes) = self.versions.get(owner_id, version_id).await? else {
            return Ok(None);
        };
        let version: FragmentVersion = decode(&bytes)?;
        version.validate()?;
        Ok(Some(version))
    }
}

fn check_ownership(fragment_id: &str, version_id: &str) -> Result<(), VersionError> {
    let parsed = parse_version_id(version_id)?;
    if parsed.fragment_id != fragment_id {
        return Err(VersionError::new(VersionErrorKind::FragmentMismatch {
            version_id: version_id.to_string(),
            fragment_id: fragment_id.to_string(),
        }));
    }
    Ok(())
}

impl std::fmt::Debug for VersionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionManager")
            .field("backend", &self.versions.backend_name())
            .finish()
    }
}
