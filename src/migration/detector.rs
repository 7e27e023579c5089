//! Cheap presence checks run before any rewriting.
//!
//! A check only answers "could this file contain a dialog call?". It does
//! not count or locate call sites. The rewrite rules decide which shapes are
//! actually transformed.

use once_cell::sync::Lazy;
use regex::Regex;

// The call (or its `window.` prefix) must follow a non-identifier character
// or the start of the text, so `customAlert(`, `obj.alert(` and
// `this.window.alert(` do not count. Same boundary as the rewrite rules.
static INFO_DIALOG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^\w$.])(?:window\.)?alert\(").unwrap());

static CONFIRM_DIALOG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^\w$.])(?:window\.)?confirm\(").unwrap());

/// Which dialog kinds the checks found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Detection {
    pub info: bool,
    pub confirm: bool,
}

impl Detection {
    pub fn any(&self) -> bool {
        self.info || self.confirm
    }
}

pub fn has_info_dialog(content: &str) -> bool {
    INFO_DIALOG.is_match(content)
}

pub fn has_confirm_dialog(content: &str) -> bool {
    CONFIRM_DIALOG.is_match(content)
}

pub fn detect(content: &str) -> Detection {
    Detection {
        info: has_info_dialog(content),
        confirm: has_confirm_dialog(content),
    }
}
