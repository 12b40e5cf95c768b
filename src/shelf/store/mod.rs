//! # Storage Layer
//!
//! The [`SnapshotStore`] trait is the gateway between the catalog and its
//! persisted form. A snapshot is read and written as one unit: every load
//! returns the full collection, every save replaces it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file per catalog
//!   - `items.json` by default (configurable)
//!   - Writes go to a temp file that is renamed over the snapshot
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the encoded snapshot text, so malformed data can be simulated
//!   - Can be told to fail saves
//!
//! ## Absent vs. malformed
//!
//! A missing snapshot is an empty catalog. A snapshot that exists but does not
//! parse is reported as [`ShelfError::Malformed`]; deciding whether to carry on
//! with an empty catalog is the caller's business (see `commands::load_collection`).
//!
//! ## Storage Format
//!
//! ```text
//! .shelf/
//! ├── items.json    # The whole catalog (JSON array of books)
//! └── config.json   # Catalog configuration
//! ```

use crate::collection::Collection;
use crate::error::{Result, ShelfError};
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Abstract interface for catalog snapshots.
pub trait SnapshotStore {
    /// Read the whole catalog. Absent snapshots load as empty.
    fn load(&self) -> Result<Collection>;

    /// Replace the persisted catalog with `collection`.
    fn save(&mut self, collection: &Collection) -> Result<()>;

    /// Where the snapshot lives, for file-backed stores.
    fn location(&self) -> Option<PathBuf>;
}

/// Bytes that are not UTF-8 or not a JSON array of books are `Malformed`.
pub(crate) fn decode(path: &Path, bytes: &[u8]) -> Result<Collection> {
    serde_json::from_slice(bytes).map_err(|source| ShelfError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn encode(collection: &Collection) -> Result<String> {
    serde_json::to_string_pretty(collection).map_err(ShelfError::Serialization)
}
