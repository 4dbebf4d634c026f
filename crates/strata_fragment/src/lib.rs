//! Fragments: owned, typed content with version history.
//!
//! A [`Fragment`] is the metadata record; its bytes live in the content table.
//! [`FragmentStore`] drives every persistence operation and delegates history
//! to an injected [`VersionManager`]. Every content replacement through
//! [`FragmentStore::update_content`] first snapshots the previous bytes as a
//! [`FragmentVersion`] numbered `1, 2, 3, ...`.
//!
//! # Example
//!
//! ```rust
//! use strata_fragment::FragmentStore;
//! use strata_storage::Stores;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fragments = FragmentStore::new(Stores::in_memory());
//!
//! let mut fragment = fragments
//!     .create("owner-1", "text/markdown", b"# Draft".to_vec())
//!     .await?;
//! let v1 = fragments.update_content(&mut fragment, b"# Final".to_vec()).await?;
//! assert_eq!(*v1.version_num(), 1);
//!
//! let html = fragments.read_as(&fragment, Some("html")).await?;
//! assert_eq!(html.content_type, "text/html");
//!
//! fragments.restore_version(&mut fragment, v1.id()).await?;
//! assert_eq!(fragments.read_content(&fragment).await?, b"# Draft");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod codec;
mod fragment;
mod store;
mod version;
mod version_id;
mod versions;

pub use fragment::{Fragment, FragmentBuilder};
pub use store::{FragmentContent, FragmentStore};
pub use version::FragmentVersion;
pub use version_id::{VersionRef, parse_version_id, to_version_id};
pub use versions::{VersionData, VersionManager};
