//! Production and in-memory implementations of [`FileSystem`].
//!
//! ```rust,ignore
//! use notify_migrate::io::{FileSystem, RealFileSystem};
//!
//! let fs = RealFileSystem::new();
//! let content = fs.read_to_string(Path::new("src/App.js"))?;
//! ```

use crate::errors::MigrateError;
use crate::io::traits::FileSystem;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Production file system implementation.
///
/// This implementation directly delegates to `std::fs` operations.
#[derive(Debug, Default, Clone)]
pub struct RealFileSystem;

impl RealFileSystem {
    /// Create a new real file system instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, MigrateError> {
        fs::read_to_string(path).map_err(|e| MigrateError::read(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), MigrateError> {
        fs::write(path, content).map_err(|e| MigrateError::write(path, e))
    }
}

/// In-memory file system for tests.
///
/// Paths registered with [`MemoryFileSystem::deny_writes`] reject writes
/// with a permission error, which makes write-failure paths reachable
/// without touching real file permissions.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RwLock<HashMap<PathBuf, String>>,
    read_only: RwLock<HashSet<PathBuf>>,
    writes: RwLock<Vec<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        if let Ok(mut files) = self.files.write() {
            files.insert(path.into(), content.into());
        }
        self
    }

    /// Make writes to `path` fail.
    pub fn deny_writes(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut read_only) = self.read_only.write() {
            read_only.insert(path.into());
        }
        self
    }

    /// Current content of a file, if present.
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.read().ok()?.get(path.as_ref()).cloned()
    }

    /// Paths written so far, in write order.
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.writes
            .read()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, MigrateError> {
        let files = self
            .files
            .read()
            .map_err(|e| MigrateError::read(path, io::Error::other(e.to_string())))?;
        files.get(path).cloned().ok_or_else(|| {
            MigrateError::read(path, io::Error::from(io::ErrorKind::NotFound))
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), MigrateError> {
        let denied = self
            .read_only
            .read()
            .map(|read_only| read_only.contains(path))
            .unwrap_or(false);
        if denied {
            return Err(MigrateError::write(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }

        self.files
            .write()
            .map_err(|e| MigrateError::write(path, io::Error::other(e.to_string())))?
            .insert(path.to_path_buf(), content.to_string());
        if let Ok(mut writes) = self.writes.write() {
            writes.push(path.to_path_buf());
        }
        Ok(())
    }
}
