//! Status markers for the per-file and summary lines.
//!
//! One decision drives all decoration: a decorated terminal gets coloured
//! emoji markers and bold summaries, anything else gets plain ASCII.

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force decoration on
    Never,  // Force decoration off
}

impl ColorMode {
    /// Mode chosen by `NO_COLOR`, `CLICOLOR=0` and `CLICOLOR_FORCE=1`.
    pub fn from_env() -> Self {
        let mut mode = Self::Auto;
        if env::var_os("NO_COLOR").is_some() {
            mode = Self::Never;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            mode = Self::Never;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v == "1") {
            mode = Self::Always;
        }
        mode
    }

    pub fn enabled(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                env::var("TERM").map_or(true, |term| term != "dumb")
                    && std::io::stdout().is_terminal()
            }
        }
    }
}

/// Marker printed in front of each status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMarker {
    Success,
    Warning,
    Error,
}

impl StatusMarker {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Error => "❌",
        }
    }

    pub fn fallback(&self) -> &'static str {
        match self {
            Self::Success => "[OK]",
            Self::Warning => "[WARN]",
            Self::Error => "[ERROR]",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StatusFormatter {
    decorate: bool,
}

impl StatusFormatter {
    pub fn new(mode: ColorMode) -> Self {
        let decorate = mode.enabled();
        if decorate {
            colored::control::set_override(true);
        }
        Self { decorate }
    }

    pub fn marker(&self, marker: StatusMarker) -> String {
        if !self.decorate {
            return marker.fallback().to_string();
        }
        let emoji = marker.emoji();
        match marker {
            StatusMarker::Success => emoji.green().to_string(),
            StatusMarker::Warning => emoji.yellow().to_string(),
            StatusMarker::Error => emoji.red().to_string(),
        }
    }

    pub fn emphasis(&self, text: &str) -> String {
        if self.decorate {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}
