//! Fragment persistence and the read path.

use crate::codec::{decode, encode};
use crate::{Fragment, FragmentVersion, VersionManager};
use std::sync::Arc;
use strata_error::{FormatError, FormatErrorKind, StorageError, StorageErrorKind, StrataResult};
use strata_formats::{mime_for_extension, normalize_extension};
use strata_storage::{KeyValueStore, Stores};

/// Bytes ready to hand to a caller, with the content type to label them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentContent {
    /// Raw or converted bytes
    pub data: Vec<u8>,
    /// Content type of `data`
    pub content_type: String,
}

/// Persists fragments and their content, and keeps their version history.
///
/// Cheap to clone; all clones share the same tables.
#[derive(Clone)]
pub struct FragmentStore {
    metadata: Arc<dyn KeyValueStore>,
    content: Arc<dyn KeyValueStore>,
    versions: VersionManager,
}

impl FragmentStore {
    /// Create a store over `stores`, with a version manager on the same tables.
    pub fn new(stores: Stores) -> Self {
        let versions = VersionManager::new(&stores);
        Self::with_version_manager(stores, versions)
    }

    /// Create a store with an explicitly supplied version manager.
    pub fn with_version_manager(stores: Stores, versions: VersionManager) -> Self {
        Self {
            metadata: stores.metadata,
            content: stores.content,
            versions,
        }
    }

    /// The version manager this store snapshots through.
    pub fn versions(&self) -> &VersionManager {
        &self.versions
    }

    /// Construct a fragment for `data`, store the bytes and save its metadata.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for a bad owner or type before anything is
    /// written, or the first storage error.
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    pub async fn create(
        &self,
        owner_id: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StrataResult<Fragment> {
        let mut fragment = Fragment::new(owner_id, content_type, data.len() as u64)?;
        self.write_content(&mut fragment, data).await?;
        tracing::info!(fragment_id = %fragment.id(), "Created fragment");
        Ok(fragment)
    }

    /// Look up a fragment by id.
    ///
    /// Returns `None` when the fragment is absent and also when its metadata
    /// cannot be read or decoded.
    #[tracing::instrument(skip(self))]
    pub async fn by_id(&self, owner_id: &str, id: &str) -> Option<Fragment> {
        match self.load(owner_id, id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, "Fragment metadata read failed, treating as not found");
                None
            }
        }
    }

    /// Ids of every fragment the owner has.
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the listing.
    #[tracing::instrument(skip(self))]
    pub async fn by_owner(&self, owner_id: &str) -> StrataResult<Vec<String>> {
        self.metadata.list_keys(owner_id).await
    }

    /// Every fragment the owner has, fully reconstructed.
    ///
    /// Records that vanish or fail to decode between listing and loading are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the listing.
    #[tracing::instrument(skip(self))]
    pub async fn by_owner_expanded(&self, owner_id: &str) -> StrataResult<Vec<Fragment>> {
        let mut fragments = Vec::new();
        for id in self.by_owner(owner_id).await? {
            match self.load(owner_id, &id).await {
                Ok(Some(fragment)) => fragments.push(fragment),
                Ok(None) => {}
                Err(e) => tracing::warn!(fragment_id = %id, error = %e, "Skipping unreadable fragment"),
            }
        }
        Ok(fragments)
    }

    /// Persist the fragment's metadata, refreshing `updated`.
    ///
    /// # Errors
    ///
    /// Propagates storage errors.
    #[tracing::instrument(skip(self, fragment), fields(fragment_id = %fragment.id()))]
    pub async fn save(&self, fragment: &mut Fragment) -> StrataResult<()> {
        fragment.touch();
        self.metadata
            .put(fragment.owner_id(), fragment.id(), encode(&*fragment)?)
            .await?;
        tracing::debug!("Saved fragment metadata");
        Ok(())
    }

    /// The fragment's current bytes.
    ///
    /// # Errors
    ///
    /// Returns a storage `NotFound` if no content is stored, or propagates
    /// read failures.
    #[tracing::instrument(skip(self, fragment), fields(fragment_id = %fragment.id()))]
    pub async fn read_content(&self, fragment: &Fragment) -> StrataResult<Vec<u8>> {
        self.content
            .get(fragment.owner_id(), fragment.id())
            .await?
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::NotFound(format!(
                    "content for fragment {}",
                    fragment.id()
                )))
                .into()
            })
    }

    /// Replace the fragment's bytes in place: write data, update size and
    /// timestamp, save metadata. The first failing step aborts the rest.
    ///
    /// Does not record history; see [`update_content`](Self::update_content).
    #[tracing::instrument(skip(self, fragment, data), fields(fragment_id = %fragment.id(), size = data.len()))]
    pub async fn write_content(&self, fragment: &mut Fragment, data: Vec<u8>) -> StrataResult<()> {
        let size = data.len() as u64;
        self.content
            .put(fragment.owner_id(), fragment.id(), data)
            .await?;
        fragment.set_size(size);
        self.save(fragment).await?;
        tracing::info!("Wrote fragment content");
        Ok(())
    }

    /// Snapshot the current content as a new version, then replace it.
    ///
    /// # Returns
    ///
    /// The version holding the pre-update content.
    #[tracing::instrument(skip(self, fragment, data), fields(fragment_id = %fragment.id(), size = data.len()))]
    pub async fn update_content(
        &self,
        fragment: &mut Fragment,
        data: Vec<u8>,
    ) -> StrataResult<FragmentVersion> {
        let version = self.versions.snapshot(fragment).await?;
        self.write_content(fragment, data).await?;
        Ok(version)
    }

    /// Make a past version's bytes the fragment's current content.
    ///
    /// Later versions are kept and the overwritten content is not
    /// snapshotted; call [`VersionManager::snapshot`] first to keep it.
    ///
    /// # Errors
    ///
    /// Returns a `VersionError` for a malformed or foreign id, or
    /// `DataNotFound` when the version has no bytes.
    #[tracing::instrument(skip(self, fragment), fields(fragment_id = %fragment.id()))]
    pub async fn restore_version(&self, fragment: &mut Fragment, version_id: &str) -> StrataResult<()> {
        let data = self.versions.restore_data(fragment, version_id).await?;
        self.write_content(fragment, data).await?;
        tracing::info!("Restored fragment version");
        Ok(())
    }

    /// Delete a fragment's metadata, content and every version.
    ///
    /// # Errors
    ///
    /// Propagates storage errors, including not-found for a missing fragment.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, owner_id: &str, id: &str) -> StrataResult<()> {
        self.metadata.delete(owner_id, id).await?;
        self.content.delete(owner_id, id).await?;
        let versions = self.versions.remove_all(owner_id, id).await?;
        tracing::info!(versions, "Deleted fragment");
        Ok(())
    }

    /// The fragment's content, optionally converted to `extension`.
    ///
    /// Without an extension the raw bytes are returned with the fragment's
    /// full type. With one, the extension must be in the fragment's formats;
    /// otherwise a `FormatError` is returned and nothing is converted.
    ///
    /// # Errors
    ///
    /// `FormatError` for a refused extension, `ConversionError` for a failed
    /// conversion, storage errors from reading.
    #[tracing::instrument(skip(self, fragment), fields(fragment_id = %fragment.id()))]
    pub async fn read_as(
        &self,
        fragment: &Fragment,
        extension: Option<&str>,
    ) -> StrataResult<FragmentContent> {
        let Some(extension) = extension else {
            return Ok(FragmentContent {
                data: self.read_content(fragment).await?,
                content_type: fragment.content_type().clone(),
            });
        };

        if !fragment.can_convert_to(extension) {
            return Err(unsupported(fragment.content_type(), extension).into());
        }
        let data = self.read_content(fragment).await?;
        render(data, fragment.content_type(), extension).await
    }

    /// A version's content, optionally converted to `extension`.
    ///
    /// Returns `None` when the version does not exist (see
    /// [`VersionManager::fetch`]).
    ///
    /// # Errors
    ///
    /// As [`read_as`](Self::read_as), judged against the version's type.
    #[tracing::instrument(skip(self))]
    pub async fn read_version_as(
        &self,
        owner_id: &str,
        fragment_id: &str,
        version_id: &str,
        extension: Option<&str>,
    ) -> StrataResult<Option<FragmentContent>> {
        let Some(found) = self.versions.fetch(owner_id, fragment_id, version_id).await? else {
            return Ok(None);
        };
        let content_type = found.metadata.content_type().clone();

        let Some(extension) = extension else {
            return Ok(Some(FragmentContent {
                data: found.data,
                content_type,
            }));
        };

        if !found.metadata.can_convert_to(extension) {
            return Err(unsupported(&content_type, extension).into());
        }
        render(found.data, &content_type, extension).await.map(Some)
    }

    async fn load(&self, owner_id: &str, id: &str) -> StrataResult<Option<Fragment>> {
        let Some(bytes) = self.metadata.get(owner_id, id).await? else {
            return Ok(None);
        };
        let fragment = decode::<Fragment>(&bytes)?.with_default_owner(owner_id);
        fragment.validate()?;
        Ok(Some(fragment))
    }
}

async fn render(data: Vec<u8>, content_type: &str, extension: &str) -> StrataResult<FragmentContent> {
    let data = strata_convert::convert(data, content_type, extension).await?;
    Ok(FragmentContent {
        data,
        content_type: mime_for_extension(extension).to_string(),
    })
}

fn unsupported(content_type: &str, extension: &str) -> FormatError {
    FormatError::new(FormatErrorKind::UnsupportedConversion {
        source_type: content_type.to_string(),
        extension: normalize_extension(extension),
    })
}

impl std::fmt::Debug for FragmentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FragmentStore")
            .field("backend", &self.metadata.backend_name())
            .field("versions", &self.versions)
            .finish()
    }
}
