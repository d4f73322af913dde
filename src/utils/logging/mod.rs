//! Logging setup and log-safe rendering of secrets
//!
//! Everything is emitted through `tracing`; this module only installs the
//! global subscriber.

pub mod sanitize;

use crate::config::LoggingConfig;
use crate::utils::error::{Result, TaskManagerError};
use tracing_subscriber::EnvFilter;

pub use sanitize::{mask_secret, sanitize_log_data};

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Calling this twice
/// returns a configuration error instead of panicking.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| TaskManagerError::config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| TaskManagerError::config(format!("Failed to install logger: {}", e)))
}
