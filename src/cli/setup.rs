//! Setup and initialization functions for CLI
//!
//! Logging goes to stderr through `env_logger` so it never mixes with the
//! per-file status lines on stdout.

use crate::formatting::{ColorMode, StatusFormatter};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize the global logger once at startup
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    if let Err(e) = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
    {
        // Already initialized - this is fine
        eprintln!("Note: Logger already initialized: {}", e);
    }
}

/// Status line formatter honouring NO_COLOR / CLICOLOR / CLICOLOR_FORCE
pub fn formatter_from_env() -> StatusFormatter {
    StatusFormatter::new(ColorMode::from_env())
}
