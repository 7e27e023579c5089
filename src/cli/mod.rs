//! CLI module for notify-migrate
//!
//! This module provides the command-line interface, including:
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

// Re-export commonly used types for convenience
pub use args::Cli;
pub use setup::{formatter_from_env, init_logging};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
