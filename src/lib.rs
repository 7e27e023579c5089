// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod migration;

// Re-export commonly used types
pub use crate::commands::{migrate_file, migrate_files, BatchReport, FileOutcome, FileReport};
pub use crate::config::NotificationTarget;
pub use crate::errors::{MigrateError, Result};
pub use crate::io::{FileSystem, MemoryFileSystem, RealFileSystem};
pub use crate::migration::{migrate_source, Migration, RuleId};
