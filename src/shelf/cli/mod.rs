//! # CLI Layer
//!
//! This module is **one possible client** for shelf, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup and per-command handlers
//! - `render`: tables, JSON and message output
//! - `styles`: terminal styles

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
