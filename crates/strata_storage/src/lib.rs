//! Owner-partitioned key-value storage for Strata.
//!
//! Every record lives under an `(owner_id, key)` pair. Owners never see each
//! other's keys. Two interchangeable backends implement [`KeyValueStore`]:
//!
//! - [`MemoryStore`]: process-local map, one instance per table
//! - [`FileSystemStore`]: one directory per owner, atomic per-key writes
//!
//! The fragment layer uses three tables (metadata, content, versions), grouped
//! as [`Stores`] and chosen once at wiring time.
//!
//! # Example
//!
//! ```rust
//! use strata_storage::{KeyValueStore, MemoryStore};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//! store.put("owner", "key", b"value".to_vec()).await?;
//! assert_eq!(store.get("owner", "key").await?, Some(b"value".to_vec()));
//! assert_eq!(store.get("someone-else", "key").await?, None);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod filesystem;
mod memory;
mod store;
mod stores;

pub use backend::{StorageBackend, StorageConfig};
pub use filesystem::FileSystemStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
pub use stores::Stores;
pub use strata_error::{StorageError, StorageErrorKind};
