//! Logging initialization.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vellum_error::{ConfigError, VellumResult};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum LogFormat {
    /// Human-readable, one event per line
    #[default]
    #[display("pretty")]
    Pretty,
    /// One JSON object per event
    #[display("json")]
    Json,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` when `verbose` is set
/// and `info` when not.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_logging(verbose: bool, format: LogFormat) -> VellumResult<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };

    result.map_err(|e| ConfigError::new(format!("Failed to initialize logging: {}", e)))?;
    Ok(())
}
