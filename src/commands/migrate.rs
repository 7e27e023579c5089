//! Per-file pipeline and batch driver.
//!
//! Files are processed one at a time, in input order. Each file's failure is
//! contained: it becomes a [`FileOutcome`] and the batch moves on.

use crate::config::NotificationTarget;
use crate::errors::{MigrateError, Result};
use crate::formatting::{StatusFormatter, StatusMarker};
use crate::io::FileSystem;
use crate::migration::migrate_source;
use std::path::{Path, PathBuf};

/// What happened to one input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and was written back.
    Updated {
        replacements: usize,
        import_inserted: bool,
    },
    /// The detector found no dialog call; nothing past it ran.
    NoPatterns,
    /// The pipeline ran but produced identical text.
    Unchanged,
    /// The path does not exist; reported and skipped.
    NotFound,
    /// Read or write failure, with the reason.
    Failed(String),
}

impl FileOutcome {
    pub fn marker(&self) -> StatusMarker {
        match self {
            Self::Updated { .. } => StatusMarker::Success,
            _ => StatusMarker::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Updated {
                replacements,
                import_inserted,
            } => {
                let mut message = format!("updated ({} call site(s) rewritten", replacements);
                if *import_inserted {
                    message.push_str(", import added");
                }
                message.push(')');
                message
            }
            Self::NoPatterns => "no dialog calls found".to_string(),
            Self::Unchanged => "no changes needed".to_string(),
            Self::NotFound => "file not found, skipped".to_string(),
            Self::Failed(reason) => format!("error: {}", reason),
        }
    }
}

impl From<MigrateError> for FileOutcome {
    fn from(error: MigrateError) -> Self {
        if error.is_not_found() {
            Self::NotFound
        } else {
            Self::Failed(error.reason())
        }
    }
}

/// Outcome for one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn status_line(&self, formatter: &StatusFormatter) -> String {
        format!(
            "{} {}: {}",
            formatter.marker(self.outcome.marker()),
            self.path.display(),
            self.outcome.message()
        )
    }
}

/// Outcomes for a whole batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Updated { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::NoPatterns | FileOutcome::Unchanged))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::NotFound))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| predicate(&f.outcome)).count()
    }

    pub fn summary_marker(&self) -> StatusMarker {
        if self.failed() > 0 {
            StatusMarker::Error
        } else if self.skipped() > 0 {
            StatusMarker::Warning
        } else {
            StatusMarker::Success
        }
    }

    pub fn summary_line(&self, formatter: &StatusFormatter) -> String {
        format!(
            "{} {}",
            formatter.marker(self.summary_marker()),
            formatter.emphasis(&format!(
                "Processed {} file(s): {} updated, {} unchanged, {} skipped, {} failed",
                self.files.len(),
                self.updated(),
                self.unchanged(),
                self.skipped(),
                self.failed()
            ))
        )
    }
}

/// Run the pipeline over one file.
///
/// # Errors
///
/// Returns the read or write error for this file. Callers in a batch
/// convert it into a [`FileOutcome`].
pub fn migrate_file<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
    target: &NotificationTarget,
) -> Result<FileOutcome> {
    let original = fs.read_to_string(path)?;

    let Some(migration) = migrate_source(&original, target) else {
        log::debug!("{}: no dialog calls detected", path.display());
        return Ok(FileOutcome::NoPatterns);
    };

    if migration.content == original {
        return Ok(FileOutcome::Unchanged);
    }

    fs.write(path, &migration.content)?;
    log::info!(
        "{}: rewrote {} call site(s), import inserted: {}",
        path.display(),
        migration.total_replacements(),
        migration.import_inserted
    );

    Ok(FileOutcome::Updated {
        replacements: migration.total_replacements(),
        import_inserted: migration.import_inserted,
    })
}

/// Migrate every path in order, calling `on_file` as each one finishes.
///
/// No failure stops the batch.
pub fn migrate_files<F, P>(
    fs: &F,
    paths: &[P],
    target: &NotificationTarget,
    mut on_file: impl FnMut(&FileReport),
) -> BatchReport
where
    F: FileSystem + ?Sized,
    P: AsRef<Path>,
{
    let files = paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let outcome = migrate_file(fs, path, target).unwrap_or_else(|e| {
                log::warn!("{}", e);
                FileOutcome::from(e)
            });
            let report = FileReport {
                path: path.to_path_buf(),
                outcome,
            };
            on_file(&report);
            report
        })
        .collect();

    BatchReport { files }
}
