//! Tracing setup.

use std::fs::File;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, LoggingConfig};

/// Sends tracing output to the configured log file.
///
/// The terminal is in raw mode while the game runs, so nothing may be
/// written to stdout or stderr. `RUST_LOG` wins over the configured filter.
pub fn init(config: &LoggingConfig) -> Result<(), ConfigError> {
    let log_file = File::create(config.file()).map_err(|e| {
        ConfigError::new(format!(
            "Failed to create log file {}: {}",
            config.file().display(),
            e
        ))
    })?;

    // Don't fail if a subscriber is already installed (tests, embedding).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(file = %config.file().display(), "Logging initialized");
    Ok(())
}
