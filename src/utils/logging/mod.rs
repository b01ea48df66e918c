//! Tracing subscriber setup
//!
//! Text output for local runs, JSON lines once deployed to a stage.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{RelayError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| RelayError::config(format!("Invalid log level {:?}: {}", config.level, e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|e| RelayError::internal(format!("Failed to install logger: {}", e)))
}
