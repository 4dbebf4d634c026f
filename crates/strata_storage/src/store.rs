//! Storage trait definition.

use strata_error::StrataResult;

/// Trait for pluggable owner-partitioned key-value backends.
///
/// Implementations must make `put`, `get` and `delete` atomic per key.
/// Nothing here is atomic across keys.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Store `value` under `(owner_id, key)`, replacing any previous value.
    async fn put(&self, owner_id: &str, key: &str, value: Vec<u8>) -> StrataResult<()>;

    /// Fetch the value under `(owner_id, key)`.
    ///
    /// # Returns
    ///
    /// `None` when nothing is stored under the key.
    async fn get(&self, owner_id: &str, key: &str) -> StrataResult<Option<Vec<u8>>>;

    /// Delete the value under `(owner_id, key)`.
    ///
    /// # Errors
    ///
    /// Returns `StorageErrorKind::NotFound` when the key does not exist.
    async fn delete(&self, owner_id: &str, key: &str) -> StrataResult<()>;

    /// Every key stored for `owner_id`, sorted. Unknown owners yield an empty list.
    async fn list_keys(&self, owner_id: &str) -> StrataResult<Vec<String>>;

    /// Backend name (e.g., "memory", "filesystem").
    fn backend_name(&self) -> &'static str;
}
