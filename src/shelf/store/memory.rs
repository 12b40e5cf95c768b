use super::{decode, encode, SnapshotStore};
use crate::collection::Collection;
use crate::error::{Result, ShelfError};
use std::path::{Path, PathBuf};

const MEMORY_LOCATION: &str = "<memory>";

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// The snapshot is kept in its encoded form so loads go through the same
/// decoding as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<String>,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose snapshot is `raw`, verbatim.
    pub fn with_raw_snapshot(raw: impl Into<String>) -> Self {
        Self {
            snapshot: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn raw_snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Collection> {
        match &self.snapshot {
            Some(text) => decode(Path::new(MEMORY_LOCATION), text.as_bytes()),
            None => Ok(Collection::new()),
        }
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        if self.fail_saves {
            return Err(ShelfError::Persistence {
                path: PathBuf::from(MEMORY_LOCATION),
                source: std::io::Error::other("saves disabled"),
            });
        }
        self.snapshot = Some(encode(collection)?);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records(mut self, records: &[(&str, &str, &str)]) -> Self {
            let mut collection = self.store.load().unwrap();
            for (title, author, publisher) in records {
                collection.push(Record::new(*title, *author, *publisher));
            }
            self.store.save(&collection).unwrap();
            self
        }

        pub fn with_numbered(mut self, count: usize) -> Self {
            let mut collection = self.store.load().unwrap();
            for i in 0..count {
                collection.push(Record::new(
                    format!("Book {}", i + 1),
                    format!("Author {}", i + 1),
                    format!("Publisher {}", i + 1),
                ));
            }
            self.store.save(&collection).unwrap();
            self
        }

        /// Consume the fixture, returning a store whose save counter starts at zero.
        pub fn build(self) -> InMemoryStore {
            InMemoryStore {
                saves: 0,
                ..self.store
            }
        }
    }
}
