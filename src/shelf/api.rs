//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for catalog operations, whatever the client: the bundled CLI, a
//! web handler, or a test.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Carries** the malformed-snapshot policy so callers don't have to
//! - **Normalizes inputs** (index text into positions)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Business logic lives in `commands/*.rs`; presentation lives in the client.
//!
//! ## Transport mapping
//!
//! | operation          | HTTP equivalent    | success | failure                 |
//! |--------------------|--------------------|---------|-------------------------|
//! | `list_records`     | `GET /`            | 200     |                         |
//! | `add_record`       | `POST /`           | 201     | persistence             |
//! | `remove_record`    | `DELETE /{index}`  | 200     | 400 `IndexOutOfRange`   |
//! | `update_records`   | (no route)         | 200     | no-op is not an error   |

use crate::commands;
use crate::config::MalformedPolicy;
use crate::error::{Result, ShelfError};
use crate::model::{Criteria, Record};
use crate::store::SnapshotStore;
use std::path::{Path, PathBuf};

/// The main API facade for catalog operations.
///
/// Generic over `SnapshotStore` so the same API runs against files or memory.
pub struct ShelfApi<S: SnapshotStore> {
    store: S,
    catalog_dir: PathBuf,
    policy: MalformedPolicy,
}

impl<S: SnapshotStore> ShelfApi<S> {
    pub fn new(store: S, catalog_dir: PathBuf) -> Self {
        Self {
            store,
            catalog_dir,
            policy: MalformedPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, self.policy)
    }

    pub fn add_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, self.policy, record)
    }

    pub fn remove_record(&mut self, index: i64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, self.policy, index)
    }

    pub fn replace_record(&mut self, index: i64, record: Record) -> Result<commands::CmdResult> {
        commands::replace::run(&mut self.store, self.policy, index, record)
    }

    pub fn search_records(&self, criteria: &Criteria) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, self.policy, criteria)
    }

    pub fn update_records(
        &mut self,
        criteria: &Criteria,
        old_value: &str,
        new_value: &str,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, self.policy, criteria, old_value, new_value)
    }

    pub fn remove_matching(&mut self, criteria: &Criteria) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, self.policy, criteria)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.catalog_dir, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.catalog_dir)
    }

    pub fn snapshot_path(&self) -> commands::CmdResult {
        commands::paths::run(&self.store)
    }

    pub fn catalog_dir(&self) -> &Path {
        &self.catalog_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Parse a user-supplied position. Negative numbers parse, so the range check
/// stays in one place.
pub fn parse_index(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| ShelfError::Api(format!("Invalid index: {}", input)))
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::update::UpdateOutcome;
pub use commands::{CmdMessage, CmdResult, ListedRecord, MessageLevel};
