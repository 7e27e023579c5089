//! Error types for loading and persisting source files.
//!
//! Only I/O can fail in this tool: the transformation itself is a pure
//! text-to-text function. Errors are always scoped to a single file and are
//! converted into a [`FileOutcome`](crate::commands::migrate::FileOutcome) at
//! the per-file boundary, so they never abort a batch.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing one source file.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// The path does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other read failure (permission denied, invalid UTF-8, ...)
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The updated content could not be written back
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MigrateError {
    /// Classify a read failure, separating missing files from everything else.
    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }

    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The error message without the path prefix, for per-file status lines.
    pub fn reason(&self) -> String {
        match self {
            Self::NotFound { .. } => "file not found".to_string(),
            Self::Read { source, .. } => format!("read failed: {}", source),
            Self::Write { source, .. } => format!("write failed: {}", source),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, MigrateError>;
