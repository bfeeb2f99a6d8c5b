//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global `tracing` subscriber
//! - Select the output format from configuration
//! - Resolve the filter from `RUST_LOG` or configuration
//!
//! # Design Decisions
//! - Uses tracing-subscriber's registry with an `EnvFilter` layer
//! - JSON format for production, pretty format for development

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::Error;

/// Filter built from `env_directive` when present and valid, otherwise from
/// the configured directive.
pub fn filter_for(config: &LoggingConfig, env_directive: Option<&str>) -> EnvFilter {
    env_directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(&config.filter))
}

/// Install the global subscriber described by `config`.
///
/// # Errors
///
/// Returns `Error::Subscriber` if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Error> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = filter_for(config, env.as_deref());
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_ansi(config.ansi).pretty())
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().with_ansi(config.ansi).compact())
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init(),
    };

    result.map_err(|e| Error::Subscriber(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Installing a global subscriber would leak into every other test in
    // this binary, so only filter resolution is tested here.

    #[test]
    fn test_configured_filter_used_without_env() {
        let config = LoggingConfig {
            filter: "debug".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(
            filter_for(&config, None).to_string(),
            EnvFilter::new("debug").to_string()
        );
    }

    #[test]
    fn test_env_directive_takes_precedence() {
        let config = LoggingConfig::default();
        let filter = filter_for(&config, Some("bus_log_adapter=trace"));
        assert_eq!(
            filter.to_string(),
            EnvFilter::new("bus_log_adapter=trace").to_string()
        );
    }

    #[test]
    fn test_invalid_env_directive_falls_back() {
        let config = LoggingConfig::default();
        let filter = filter_for(&config, Some("bus_log_adapter=loud"));
        assert_eq!(filter.to_string(), EnvFilter::new("info").to_string());
    }
}
