//! Logging setup for applications embedding the SDK.
//!
//! The SDK only emits `tracing` events; it never installs a subscriber on its
//! own. Call [`init_tracing`] once at startup to get output.

use std::env;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Subscriber options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Filter directive, e.g. `info` or `hashgraph_sdk=debug`.
    pub log_level: String,

    /// Emit one JSON object per event instead of human-readable lines.
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { log_level: "info".to_owned(), json_logs: false }
    }
}

impl TelemetryConfig {
    /// Read the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `HASHGRAPH_LOG_LEVEL` or `RUST_LOG`: filter directive (default: info)
    /// - `HASHGRAPH_JSON_LOGS`: `true`/`1` for JSON output (default: false)
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("HASHGRAPH_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_owned()),

            json_logs: env::var("HASHGRAPH_JSON_LOGS")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
        }
    }
}

/// Install a global subscriber built from `config`.
///
/// Fails when the filter does not parse or a subscriber is already set.
pub fn init_tracing(config: &TelemetryConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| Error::Config(format!("invalid log filter `{}`: {e}", config.log_level)))?;

    let init = if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry().with(env_filter).with(json_layer).try_init()
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).with_ansi(true);

        tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init()
    };

    init.map_err(|e| Error::Config(e.to_string()))?;

    tracing::debug!(log_level = %config.log_level, json_logs = config.json_logs, "tracing initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_bad_filter_is_a_config_error() {
        let config = TelemetryConfig { log_level: "hashgraph_sdk=loudest".to_owned(), json_logs: false };
        assert!(matches!(init_tracing(&config), Err(Error::Config(_))));
    }
}
