//! The rewrite chain: four textual rules applied in a fixed order.
//!
//! Every rule rescans the whole buffer produced by the previous one. Message
//! arguments must be a single quoted literal on one line, without escaped
//! quotes. Statements may start anywhere on a line; generated continuation
//! lines take the indentation of the line the match starts on. Any other call
//! shape is left exactly as it was.
//!
//! | Rule | Input shape | Output |
//! |---|---|---|
//! | [`RuleId::BareAlert`] | `alert('msg')` | `notificationManager.show('msg', 'info')` |
//! | [`RuleId::WindowAlert`] | `window.alert('msg')` | same as above |
//! | [`RuleId::ConfirmGuard`] | `if (!confirm('msg')) return;` | awaited promise bound to `confirmed`, then `if (!confirmed) return;` |
//! | [`RuleId::ConfirmGuard`] | `else if (!confirm('msg')) return;` | `else { ... }` wrapping the same guard |
//! | [`RuleId::ConfirmAssignment`] | `const ok = confirm('msg')` | `const ok = await new Promise(...)` |

use crate::config::NotificationTarget;
use crate::migration::line_ending;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BARE_ALERT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<pre>^|[^\w$.])alert\([ \t]*(?P<msg>'[^'\n]*'|"[^"\n]*")[ \t]*\)"#).unwrap()
});

static WINDOW_ALERT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<pre>^|[^\w$.])window\.alert\([ \t]*(?P<msg>'[^'\n]*'|"[^"\n]*")[ \t]*\)"#)
        .unwrap()
});

// `pre` plays the same role as in the alert rules: the character before the
// keyword must not belong to an identifier or member access.
static CONFIRM_GUARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?P<pre>^|[^\w$.])(?P<else>else[ \t]+)?if[ \t]*\([ \t]*![ \t]*(?:window\.)?confirm\([ \t]*(?P<msg>'[^'\n]*'|"[^"\n]*")[ \t]*\)[ \t]*\)[ \t]*return[ \t]*;"#,
    )
    .unwrap()
});

static CONFIRM_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?P<pre>^|[^\w$.])(?P<kind>const|let|var)[ \t]+(?P<name>[A-Za-z_$][\w$]*)[ \t]*=[ \t]*(?:window\.)?confirm\([ \t]*(?P<msg>'[^'\n]*'|"[^"\n]*")[ \t]*\)"#,
    )
    .unwrap()
});

/// Identifies one rewrite rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    BareAlert,
    WindowAlert,
    ConfirmGuard,
    ConfirmAssignment,
}

impl RuleId {
    /// Application order. Output for overlapping inputs depends on it.
    pub const ORDERED: [RuleId; 4] = [
        RuleId::BareAlert,
        RuleId::WindowAlert,
        RuleId::ConfirmGuard,
        RuleId::ConfirmAssignment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::BareAlert => "bare-alert",
            Self::WindowAlert => "window-alert",
            Self::ConfirmGuard => "confirm-guard",
            Self::ConfirmAssignment => "confirm-assignment",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::BareAlert => &BARE_ALERT,
            Self::WindowAlert => &WINDOW_ALERT,
            Self::ConfirmGuard => &CONFIRM_GUARD,
            Self::ConfirmAssignment => &CONFIRM_ASSIGNMENT,
        }
    }

    fn render(
        &self,
        caps: &Captures,
        content: &str,
        target: &NotificationTarget,
        newline: &str,
    ) -> String {
        let pre = &caps["pre"];
        match self {
            Self::BareAlert | Self::WindowAlert => format!(
                "{}{}.show({}, '{}')",
                pre, target.manager, &caps["msg"], target.info_severity
            ),
            Self::ConfirmGuard => {
                let indent = line_indent(content, caps);
                match caps.name("else") {
                    // `else const ...` is not valid, so the guard gets its own block
                    Some(_) => {
                        let inner = format!("{indent}  ");
                        format!(
                            "{pre}else {{{nl}{guard}{nl}{indent}}}",
                            guard = confirm_guard(&inner, &inner, &caps["msg"], target, newline),
                            nl = newline,
                        )
                    }
                    None => format!(
                        "{pre}{}",
                        confirm_guard("", indent, &caps["msg"], target, newline)
                    ),
                }
            }
            Self::ConfirmAssignment => format!(
                "{}{} {} = {}",
                pre,
                &caps["kind"],
                &caps["name"],
                deferred_confirm(line_indent(content, caps), &caps["msg"], target, newline)
            ),
        }
    }
}

/// Leading whitespace of the line the matched statement starts on.
fn line_indent<'a>(content: &'a str, caps: &Captures) -> &'a str {
    let statement_start = caps.name("pre").map_or(0, |pre| pre.end());
    let line_start = content[..statement_start]
        .rfind('\n')
        .map_or(0, |idx| idx + 1);
    let line = &content[line_start..];
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..width]
}

fn confirm_guard(
    lead: &str,
    indent: &str,
    message: &str,
    target: &NotificationTarget,
    nl: &str,
) -> String {
    format!(
        "{lead}const confirmed = {promise};{nl}{indent}if (!confirmed) return;",
        promise = deferred_confirm(indent, message, target, nl),
    )
}

// await new Promise((resolve) => {
//   notificationManager.confirm('msg', resolve);
// })
fn deferred_confirm(indent: &str, message: &str, target: &NotificationTarget, nl: &str) -> String {
    format!(
        "await new Promise((resolve) => {{{nl}{indent}  {manager}.confirm({message}, resolve);{nl}{indent}}})",
        manager = target.manager,
    )
}

/// Number of call sites one rule rewrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleReplacement {
    pub rule: RuleId,
    pub count: usize,
}

/// Buffer after the full chain, with per-rule counts in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    pub content: String,
    pub replacements: Vec<RuleReplacement>,
}

impl RewriteResult {
    pub fn total(&self) -> usize {
        self.replacements.iter().map(|r| r.count).sum()
    }
}

/// Apply a single rule over the whole buffer.
pub fn apply_rule(rule: RuleId, content: &str, target: &NotificationTarget) -> (String, usize) {
    let newline = line_ending(content);
    let mut count = 0;
    let rewritten = rule.pattern().replace_all(content, |caps: &Captures| {
        count += 1;
        rule.render(caps, content, target, newline)
    });
    (rewritten.into_owned(), count)
}

/// Run every rule in [`RuleId::ORDERED`], each over the previous output.
pub fn rewrite_all(content: String, target: &NotificationTarget) -> RewriteResult {
    let (content, replacements) = RuleId::ORDERED.iter().fold(
        (content, Vec::with_capacity(RuleId::ORDERED.len())),
        |(text, mut replacements), &rule| {
            let (next, count) = apply_rule(rule, &text, target);
            log::debug!("rule {} rewrote {} call site(s)", rule.name(), count);
            replacements.push(RuleReplacement { rule, count });
            (next, replacements)
        },
    );

    RewriteResult {
        content,
        replacements,
    }
}
