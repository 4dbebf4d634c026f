//! Logging setup.

use crate::LoggingConfig;
use strata_error::{ConfigError, StrataResult};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Logs go to stderr so
/// command output on stdout stays clean.
///
/// # Errors
///
/// Returns a `ConfigError` if the level is not a valid filter directive or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> StrataResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level()))
        .map_err(|e| ConfigError::new(format!("Invalid log level '{}': {}", config.level(), e)))?;

    let fmt_layer = if *config.json() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install tracing subscriber: {}", e)))?;

    tracing::debug!(json = config.json(), "Tracing initialized");
    Ok(())
}
