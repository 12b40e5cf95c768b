//! # Command Layer
//!
//! One module per operation. Every command follows the same shape: load the
//! catalog through [`load_collection`], work on the in-memory
//! [`Collection`], and, when something changed, save the whole catalog back.
//! Nothing is kept between calls; the snapshot is the source of truth.
//!
//! Commands return a [`CmdResult`] and never print.

use crate::collection::Collection;
use crate::config::{MalformedPolicy, ShelfConfig};
use crate::error::{Result, ShelfError};
use crate::model::Record;
use crate::store::SnapshotStore;
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod paths;
pub mod remove;
pub mod replace;
pub mod search;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record together with its position in the catalog at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedRecord {
    pub index: usize,
    #[serde(flatten)]
    pub record: Record,
}

impl ListedRecord {
    pub fn new(index: usize, record: Record) -> Self {
        Self { index, record }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<ListedRecord>,
    pub listed_records: Vec<ListedRecord>,
    pub paths: Vec<PathBuf>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<ListedRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<ListedRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when the command changed nothing it was asked to change.
    pub fn is_noop(&self) -> bool {
        self.affected_records.is_empty()
    }
}

/// Load the catalog, applying `policy` to a malformed snapshot.
///
/// This is the only place a malformed snapshot may be turned into an empty
/// catalog. When that happens a warning is logged and attached to `result`.
pub fn load_collection<S: SnapshotStore>(
    store: &S,
    policy: MalformedPolicy,
    result: &mut CmdResult,
) -> Result<Collection> {
    match store.load() {
        Err(ShelfError::Malformed { path, source }) if policy == MalformedPolicy::Empty => {
            tracing::warn!(path = %path.display(), error = %source, "malformed snapshot treated as empty");
            result.add_message(CmdMessage::warning(format!(
                "Snapshot at {} is unreadable ({}); treating catalog as empty",
                path.display(),
                source
            )));
            Ok(Collection::new())
        }
        other => other,
    }
}

pub(crate) fn listed(collection: &Collection) -> Vec<ListedRecord> {
    collection
        .iter()
        .enumerate()
        .map(|(index, record)| ListedRecord::new(index, record.clone()))
        .collect()
}
