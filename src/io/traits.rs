//! I/O trait definitions for the migration pipeline.
//!
//! The pipeline itself is pure text in, text out. Reading the source and
//! writing it back happen at the edges through [`FileSystem`], which lets the
//! batch driver run against an in-memory file system in tests.

use crate::errors::MigrateError;
use std::path::Path;

/// File system operations needed by the Loader and Writer stages.
pub trait FileSystem {
    /// Read a file's full contents as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `MigrateError::NotFound` when the path does not exist and
    /// `MigrateError::Read` for any other failure (permission denied,
    /// invalid UTF-8, ...).
    fn read_to_string(&self, path: &Path) -> Result<String, MigrateError>;

    /// Overwrite a file with `content`.
    ///
    /// This is a plain full overwrite: there is no temporary file or backup,
    /// so a crash mid-write can leave the file truncated.
    ///
    /// # Errors
    ///
    /// Returns `MigrateError::Write` if the file cannot be written.
    fn write(&self, path: &Path, content: &str) -> Result<(), MigrateError>;
}
