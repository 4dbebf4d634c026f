//! Contract tests run against every storage backend.

use strata_storage::{
    FileSystemStore, KeyValueStore, MemoryStore, StorageBackend, StorageConfig, StorageErrorKind,
    Stores,
};
use strata_error::StrataErrorKind;
use tempfile::TempDir;

fn storage_kind(err: &strata_error::StrataError) -> Option<&StorageErrorKind> {
    match err.kind() {
        StrataErrorKind::Storage(e) => Some(&e.kind),
        _ => None,
    }
}

async fn put_get_replace(store: &dyn KeyValueStore) {
    store.put("alice", "k1", b"one".to_vec()).await.unwrap();
    assert_eq!(store.get("alice", "k1").await.unwrap(), Some(b"one".to_vec()));

    store.put("alice", "k1", b"two".to_vec()).await.unwrap();
    assert_eq!(store.get("alice", "k1").await.unwrap(), Some(b"two".to_vec()));

    assert_eq!(store.get("alice", "missing").await.unwrap(), None);
}

async fn owners_are_isolated(store: &dyn KeyValueStore) {
    store.put("alice", "shared", b"a".to_vec()).await.unwrap();
    store.put("bob", "shared", b"b".to_vec()).await.unwrap();

    assert_eq!(store.get("alice", "shared").await.unwrap(), Some(b"a".to_vec()));
    assert_eq!(store.get("bob", "shared").await.unwrap(), Some(b"b".to_vec()));
    assert_eq!(store.list_keys("carol").await.unwrap(), Vec::<String>::new());
}

async fn list_and_delete(store: &dyn KeyValueStore) {
    store.put("dave", "b_v2", vec![2]).await.unwrap();
    store.put("dave", "a", vec![]).await.unwrap();
    store.put("dave", "b_v1", vec![1]).await.unwrap();

    assert_eq!(store.list_keys("dave").await.unwrap(), vec!["a", "b_v1", "b_v2"]);

    store.delete("dave", "b_v1").await.unwrap();
    assert_eq!(store.get("dave", "b_v1").await.unwrap(), None);
    assert_eq!(store.list_keys("dave").await.unwrap(), vec!["a", "b_v2"]);

    // Empty values survive a round trip
    assert_eq!(store.get("dave", "a").await.unwrap(), Some(vec![]));
}

async fn delete_missing_is_not_found(store: &dyn KeyValueStore) {
    let err = store.delete("erin", "ghost").await.unwrap_err();
    assert!(matches!(storage_kind(&err), Some(StorageErrorKind::NotFound(_))));
    assert!(err.is_not_found());
}

async fn empty_key_is_rejected(store: &dyn KeyValueStore) {
    let err = store.put("erin", "", vec![1]).await.unwrap_err();
    assert!(matches!(storage_kind(&err), Some(StorageErrorKind::InvalidKey(_))));
    let err = store.put("", "k", vec![1]).await.unwrap_err();
    assert!(matches!(storage_kind(&err), Some(StorageErrorKind::InvalidKey(_))));
}

async fn run_contract(store: &dyn KeyValueStore) {
    put_get_replace(store).await;
    owners_are_isolated(store).await;
    list_and_delete(store).await;
    delete_missing_is_not_found(store).await;
    empty_key_is_rejected(store).await;
}

#[tokio::test]
async fn test_memory_store_contract() {
    let store = MemoryStore::new();
    assert_eq!(store.backend_name(), "memory");
    run_contract(&store).await;
}

#[tokio::test]
async fn test_filesystem_store_contract() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();
    assert_eq!(store.backend_name(), "filesystem");
    run_contract(&store).await;
}

#[tokio::test]
async fn test_memory_stores_are_independent() {
    let first = MemoryStore::new();
    let second = MemoryStore::new();
    first.put("alice", "k", vec![1]).await.unwrap();
    assert_eq!(second.get("alice", "k").await.unwrap(), None);
}

#[tokio::test]
async fn test_filesystem_rejects_path_traversal() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    for key in ["../escape", "a/b", ".hidden", "..", "with space"] {
        let err = store.put("alice", key, vec![1]).await.unwrap_err();
        assert!(
            matches!(storage_kind(&err), Some(StorageErrorKind::InvalidKey(_))),
            "{key} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_filesystem_persists_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    {
        let store = FileSystemStore::new(temp_dir.path()).unwrap();
        store.put("alice@example.com", "k", b"durable".to_vec()).await.unwrap();
    }
    let reopened = FileSystemStore::new(temp_dir.path()).unwrap();
    assert_eq!(
        reopened.get("alice@example.com", "k").await.unwrap(),
        Some(b"durable".to_vec())
    );
    assert_eq!(reopened.list_keys("alice@example.com").await.unwrap(), vec!["k"]);
}

#[tokio::test]
async fn test_stores_from_config() {
    let memory = Stores::from_config(&StorageConfig::default()).unwrap();
    assert_eq!(memory.backend_name(), "memory");

    let temp_dir = TempDir::new().unwrap();
    let config = StorageConfig {
        backend: StorageBackend::Filesystem,
        data_dir: temp_dir.path().to_path_buf(),
    };
    let fs = Stores::from_config(&config).unwrap();
    assert_eq!(fs.backend_name(), "filesystem");
    assert!(temp_dir.path().join("metadata").is_dir());
    assert!(temp_dir.path().join("content").is_dir());
    assert!(temp_dir.path().join("versions").is_dir());
}
