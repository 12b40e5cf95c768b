use super::{decode, encode, SnapshotStore};
use crate::collection::Collection;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_SNAPSHOT_FILE: &str = "items.json";

pub struct FileStore {
    root: PathBuf,
    snapshot_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            snapshot_file: DEFAULT_SNAPSHOT_FILE.to_string(),
        }
    }

    pub fn with_snapshot_file(mut self, name: &str) -> Self {
        self.snapshot_file = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(&self.snapshot_file)
    }

    /// A fresh sibling of the snapshot to write into before renaming.
    fn tmp_path(&self) -> PathBuf {
        self.root
            .join(format!(".{}-{}.tmp", self.snapshot_file, Uuid::new_v4()))
    }

    fn write_atomically(&self, path: &Path, content: &str) -> std::io::Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        let tmp_file = self.tmp_path();
        fs::write(&tmp_file, content)?;
        if let Err(e) = fs::rename(&tmp_file, path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(e);
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Collection> {
        let path = self.snapshot_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no snapshot, starting empty");
            return Ok(Collection::new());
        }
        let content = fs::read(&path).map_err(ShelfError::Io)?;
        let collection = decode(&path, &content)?;
        tracing::debug!(path = %path.display(), records = collection.len(), "loaded snapshot");
        Ok(collection)
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        let path = self.snapshot_path();
        let content = encode(collection)?;

        if let Err(source) = self.write_atomically(&path, &content) {
            tracing::error!(path = %path.display(), error = %source, "failed to save snapshot");
            return Err(ShelfError::Persistence { path, source });
        }

        tracing::debug!(path = %path.display(), records = collection.len(), "saved snapshot");
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.snapshot_path())
    }
}
