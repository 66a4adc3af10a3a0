//! Structured logging setup
//!
//! Diagnostics go through `tracing` to stderr so stdout carries only
//! report lines. Verbosity follows the `--verbose`/`--debug` flags.

use crate::error::{AppError, Result};
use crate::models::Config;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Minimum level for this crate's events
pub fn level_for(config: &Config) -> Level {
    if config.debug {
        Level::DEBUG
    } else if config.verbose {
        Level::INFO
    } else {
        Level::WARN
    }
}

/// Filter directives: this crate at the configured level, dependencies
/// only at warn unless debugging
pub fn filter_for(config: &Config) -> EnvFilter {
    let crate_level = level_for(config);
    let deps_level = if config.debug { Level::DEBUG } else { Level::WARN };
    EnvFilter::new(format!(
        "{}={},{}",
        env!("CARGO_CRATE_NAME"),
        crate_level.as_str().to_lowercase(),
        deps_level.as_str().to_lowercase()
    ))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(config))
        .with_writer(std::io::stderr)
        .with_ansi(config.enable_color)
        .with_target(config.debug)
        .try_init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {}", e)))
}
