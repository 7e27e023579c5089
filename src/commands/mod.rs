//! Command implementations.
//!
//! The binary exposes a single operation: migrate each given file from
//! blocking dialog calls to the notification manager.

pub mod migrate;

pub use migrate::{migrate_file, migrate_files, BatchReport, FileOutcome, FileReport};
