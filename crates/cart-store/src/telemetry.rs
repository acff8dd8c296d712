//! Tracing subscriber setup.

use std::env::{self, VarError};

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::CartError;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` overrides `config.filter` when set; an unparsable `RUST_LOG`
/// is an error rather than a silent fallback. Fails if a global subscriber
/// is already installed or the filter is invalid.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), CartError> {
    let filter = build_filter(env::var(EnvFilter::DEFAULT_ENV), &config.filter)?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| CartError::Telemetry(e.to_string()))
}

fn build_filter(env_value: Result<String, VarError>, fallback: &str) -> Result<EnvFilter, CartError> {
    match env_value {
        Ok(directives) => EnvFilter::try_new(&directives).map_err(|e| {
            CartError::Telemetry(format!("invalid {} {:?}: {}", EnvFilter::DEFAULT_ENV, directives, e))
        }),
        Err(VarError::NotPresent) => EnvFilter::try_new(fallback)
            .map_err(|e| CartError::Telemetry(format!("invalid filter {:?}: {}", fallback, e))),
        Err(e) => Err(CartError::Telemetry(format!(
            "invalid {}: {}",
            EnvFilter::DEFAULT_ENV,
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig::default();
        // Another test may already own the global subscriber.
        let _ = init_tracing(&config);
        assert!(matches!(init_tracing(&config), Err(CartError::Telemetry(_))));
    }

    #[test]
    fn test_unset_env_uses_config_filter() {
        assert!(build_filter(Err(VarError::NotPresent), "cart_store=debug").is_ok());
    }

    #[test]
    fn test_env_filter_takes_precedence() {
        assert!(build_filter(Ok("warn".to_string()), "cart_store=loud").is_ok());
    }

    #[test]
    fn test_invalid_env_filter_is_error() {
        let err = build_filter(Ok("cart_store=loud".to_string()), "info").unwrap_err();
        assert!(matches!(err, CartError::Telemetry(msg) if msg.contains("RUST_LOG")));
    }

    #[test]
    fn test_invalid_config_filter_is_error() {
        let err = build_filter(Err(VarError::NotPresent), "cart_store=loud").unwrap_err();
        assert!(matches!(err, CartError::Telemetry(msg) if msg.contains("invalid filter")));
    }
}
