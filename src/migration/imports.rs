//! Best-effort insertion of the notification manager import.
//!
//! There is no parser here. The insertion point comes from a line scan over
//! the leading import block, with a fallback anchored on the framework import
//! for files that open with a directive or shebang. Unusual layouts can still
//! put the import somewhere odd; that is accepted.

use crate::config::NotificationTarget;
use crate::migration::line_ending;
use once_cell::sync::Lazy;
use regex::Regex;

static FROM_CLAUSE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\bfrom\s*['"]"#).unwrap());

/// Insert the manager import unless the manager name already appears.
///
/// Returns `None` when nothing was inserted. The presence check is a plain
/// substring search, so a mention in a comment or string also suppresses
/// insertion.
pub fn ensure_import(content: &str, target: &NotificationTarget) -> Option<String> {
    if content.contains(target.manager.as_str()) {
        log::debug!("'{}' already referenced, skipping import", target.manager);
        return None;
    }

    let line = insertion_line(content, &target.framework_module);
    log::debug!("inserting import at line {}", line);
    Some(insert_line(content, line, &target.import_statement()))
}

/// Zero-based line index the import should be inserted before.
pub fn insertion_line(content: &str, framework_module: &str) -> usize {
    match scan_leading_imports(content) {
        0 => framework_anchor_line(content, framework_module).unwrap_or(0),
        line => line,
    }
}

/// Index just past the last import of the leading import block.
///
/// Blank and comment lines are skipped; the first other non-import line
/// ends the scan. A multi-line `import { ... } from '...'` counts as one
/// statement ending on its `from` line.
pub fn scan_leading_imports(content: &str) -> usize {
    let mut insert_at = 0;
    let mut open_import = false;

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if open_import {
            if closes_import(trimmed) {
                open_import = false;
                insert_at = idx + 1;
            }
            continue;
        }

        if is_import(trimmed) {
            if closes_import(trimmed) || is_side_effect_import(trimmed) {
                insert_at = idx + 1;
            } else {
                open_import = true;
            }
        } else if !trimmed.is_empty() && !is_comment(trimmed) {
            break;
        }
    }

    insert_at
}

/// Line following the first `import ... from '<module>'` statement.
pub fn framework_anchor_line(content: &str, framework_module: &str) -> Option<usize> {
    let pattern = format!(
        r#"(?m)^[ \t]*import\b[^;]*?\bfrom\s*['"]{}['"][ \t]*;?"#,
        regex::escape(framework_module)
    );
    let anchor = Regex::new(&pattern).ok()?;
    let found = anchor.find(content)?;
    Some(content[..found.end()].matches('\n').count() + 1)
}

fn is_import(trimmed: &str) -> bool {
    trimmed
        .strip_prefix("import")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|next| next.is_whitespace() || matches!(next, '{' | '*' | '\'' | '"'))
}

fn is_side_effect_import(trimmed: &str) -> bool {
    trimmed
        .strip_prefix("import")
        .map(str::trim_start)
        .is_some_and(|rest| rest.starts_with('\'') || rest.starts_with('"'))
}

fn closes_import(trimmed: &str) -> bool {
    trimmed.ends_with(';') || FROM_CLAUSE.is_match(trimmed)
}

fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

fn insert_line(content: &str, line: usize, statement: &str) -> String {
    let newline = line_ending(content);
    let offset: usize = content
        .split_inclusive('\n')
        .take(line)
        .map(str::len)
        .sum();
    let (head, tail) = content.split_at(offset);

    let mut out = String::with_capacity(content.len() + statement.len() + 2 * newline.len());
    out.push_str(head);
    if !head.is_empty() && !head.ends_with('\n') {
        out.push_str(newline);
    }
    out.push_str(statement);
    out.push_str(newline);
    out.push_str(tail);
    out
}
