//! Tracing Setup
//!
//! Installs the global `tracing` subscriber from [`LoggingConfig`].
//!
//! `RUST_LOG` takes precedence over the configured level. Formats:
//! `json` for log shippers, `pretty` for development, `compact` otherwise.
//!
//! # Usage
//!
//! ```rust,ignore
//! use suitability_engine::telemetry::init_tracing;
//!
//! init_tracing(&config.observability.logging)?;
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` if set and valid, else the configured level.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TryInitError> {
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = env_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match config.format.as_str() {
        "json" => builder
            .json()
            .with_current_span(config.include_spans)
            .with_span_list(config.include_spans)
            .finish()
            .try_init()?,
        "pretty" => builder.pretty().finish().try_init()?,
        _ => builder.compact().finish().try_init()?,
    }

    tracing::info!(
        level = %config.level,
        format = %config.format,
        "Logging initialized"
    );
    Ok(())
}
