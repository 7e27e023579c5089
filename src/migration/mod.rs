//! Pure source-to-source migration of blocking dialog calls.
//!
//! ```rust
//! use notify_migrate::config::NotificationTarget;
//! use notify_migrate::migration::migrate_source;
//!
//! let migration = migrate_source("alert('Saved!');\n", &NotificationTarget::default())
//!     .expect("dialog call detected");
//! assert!(migration.content.contains("notificationManager.show('Saved!', 'info')"));
//! assert!(migration.import_inserted);
//! ```

pub mod detector;
pub mod imports;
pub mod rewrite;

pub use detector::{detect, Detection};
pub use imports::ensure_import;
pub use rewrite::{apply_rule, rewrite_all, RewriteResult, RuleId, RuleReplacement};

use crate::config::NotificationTarget;

/// Result of running the pipeline over one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    pub content: String,
    pub detection: Detection,
    pub import_inserted: bool,
    pub replacements: Vec<RuleReplacement>,
}

impl Migration {
    pub fn total_replacements(&self) -> usize {
        self.replacements.iter().map(|r| r.count).sum()
    }
}

/// Detect, inject the import, then run the rewrite chain.
///
/// Returns `None` when the detector finds no dialog call, in which case the
/// text was not touched at all. A detected call that matches none of the
/// rewrite shapes still receives the import.
pub fn migrate_source(content: &str, target: &NotificationTarget) -> Option<Migration> {
    let detection = detect(content);
    if !detection.any() {
        return None;
    }

    let (with_import, import_inserted) = match ensure_import(content, target) {
        Some(updated) => (updated, true),
        None => (content.to_string(), false),
    };

    let RewriteResult {
        content,
        replacements,
    } = rewrite_all(with_import, target);

    Some(Migration {
        content,
        detection,
        import_inserted,
        replacements,
    })
}

/// Line terminator used by the buffer, judged from its first line.
pub(crate) fn line_ending(content: &str) -> &'static str {
    match content.find('\n') {
        Some(idx) if content[..idx].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn migrate(content: &str) -> Option<Migration> {
        migrate_source(content, &NotificationTarget::default())
    }

    #[test]
    fn test_full_pipeline() {
        let source = indoc! {"
            import React from 'react';
            import { apiDelete } from '../../utils/ajax';

            const List = () => {
              const handleDelete = async (id) => {
                if (!window.confirm('삭제하시겠습니까?')) return;
                await apiDelete(id);
                alert('삭제되었습니다.');
              };
            };
        "};
        let expected = indoc! {"
            import React from 'react';
            import { apiDelete } from '../../utils/ajax';
            import notificationManager from '../../utils/notification';

            const List = () => {
              const handleDelete = async (id) => {
                const confirmed = await new Promise((resolve) => {
                  notificationManager.confirm('삭제하시겠습니까?', resolve);
                });
                if (!confirmed) return;
                await apiDelete(id);
                notificationManager.show('삭제되었습니다.', 'info');
              };
            };
        "};

        let migration = migrate(source).unwrap();
        assert_eq!(migration.content, expected);
        assert!(migration.import_inserted);
        assert_eq!(migration.total_replacements(), 2);
    }

    #[test]
    fn test_nothing_detected_short_circuits() {
        assert_eq!(migrate("const x = showAlert('hi');\n"), None);
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let first = migrate("alert('Saved!');\nconst ok = confirm('Go?');\n").unwrap();
        assert_eq!(first.content.matches("import notificationManager").count(), 1);

        // Rewritten calls are namespaced, so the detector no longer fires.
        assert_eq!(migrate(&first.content), None);
    }

    #[test]
    fn test_unsupported_call_still_gets_import() {
        let migration = migrate("if (confirm('Sure?')) { run(); }\n").unwrap();
        assert!(migration.import_inserted);
        assert_eq!(migration.total_replacements(), 0);
        assert!(migration.content.ends_with("if (confirm('Sure?')) { run(); }\n"));
    }

    #[test]
    fn test_inline_guard_is_rewritten() {
        let migration =
            migrate("const onDel = () => { if (!confirm('Delete?')) return; remove(); };\n").unwrap();
        assert_eq!(migration.total_replacements(), 1);
        assert!(!migration.content.contains("if (!confirm("));
        assert!(migration
            .content
            .contains("notificationManager.confirm('Delete?', resolve);"));
    }

    #[test]
    fn test_line_ending_detection() {
        assert_eq!(line_ending("a\r\nb"), "\r\n");
        assert_eq!(line_ending("a\nb\r\n"), "\n");
        assert_eq!(line_ending("single line"), "\n");
    }
}
