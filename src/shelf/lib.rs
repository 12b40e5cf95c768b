//! # Shelf Architecture
//!
//! Shelf keeps a small catalog of books (title, author, publisher) in a single
//! JSON snapshot. It is a library with a CLI client on top; the same core could
//! sit behind an HTTP handler.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → mutate in memory → save, once per call            │
//! │  - Malformed-snapshot policy applied at load                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (collection.rs) + Matcher (matcher.rs)        │
//! │  - Positional add / remove / replace, criteria search       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnapshotStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions, not ids
//!
//! Books have no identifier. Every operation addresses a book by its 0-based
//! position in the snapshot as loaded by that same operation. Two processes
//! writing the same catalog at once race on load/modify/save and the last
//! save wins; there is no lock.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`collection`]: The in-memory catalog and its positional primitives
//! - [`matcher`]: Criteria matching
//! - [`store`]: Snapshot storage abstraction and implementations
//! - [`model`]: `Record`, `Field`, `Criteria`, `Scope`
//! - [`config`]: Per-catalog configuration
//! - [`init`]: Catalog directory discovery and context setup
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod matcher;
pub mod model;
pub mod store;
