//! Logging System for ZED Core.
//!
//! This module provides the logging setup for the ZED dashboard, built
//! upon the `tracing` ecosystem. Console output supports text and JSON
//! formats, selected through [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::CoreError;

use std::io::stdout;
use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for tests and for early application startup before the full
/// configuration is loaded. Messages are filtered through the `RUST_LOG`
/// environment variable, defaulting to "info" when it is absent or
/// invalid. Errors during initialization (e.g., a global logger already
/// set) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Initializes the global logging system based on the provided [`LoggingConfig`].
///
/// Configures and sets the global `tracing` subscriber with a console
/// layer in the configured format.
///
/// # Arguments
///
/// * `config`: A reference to the [`LoggingConfig`].
/// * `is_reload`: If `true`, a failure to replace an already-set global
///   subscriber is reported on stderr and tolerated; if `false`, it is
///   returned as an error.
///
/// # Errors
///
/// Returns `CoreError::LoggingInitialization` if the configured level is
/// invalid or setting the global subscriber fails on initial setup.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    // Validation normally happens in the config loader; checked here too so
    // hand-built configs cannot install an unfilterable subscriber.
    let level_filter_str = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE.to_string(),
        "debug" => Level::DEBUG.to_string(),
        "info" => Level::INFO.to_string(),
        "warn" => Level::WARN.to_string(),
        "error" => Level::ERROR.to_string(),
        invalid_level => {
            return Err(CoreError::LoggingInitialization(format!(
                "Invalid log level in config: {}",
                invalid_level
            )));
        }
    };

    let stdout_filter = EnvFilter::new(level_filter_str);
    let stdout_layer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed(),
    };

    match Registry::default().with(stdout_layer).try_init() {
        Ok(()) => Ok(()),
        Err(e) => {
            if !is_reload {
                Err(CoreError::LoggingInitialization(format!(
                    "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
                    e
                )))
            } else {
                eprintln!(
                    "[INFO] Re-initializing logging configuration attempted. Previous logger may persist. Error: {}",
                    e
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;

    /// Helper to ensure global logger state is clean for a test.
    /// Best-effort only, as `tracing` has no public reset API.
    fn ensure_clean_logger_state() {
        let _ = tracing::subscriber::set_global_default(tracing::subscriber::NoSubscriber::default());
    }

    #[test]
    fn test_init_minimal_logging_runs_without_panic() {
        ensure_clean_logger_state();
        init_minimal_logging();
        // Can be called multiple times without panic (ignores error).
        init_minimal_logging();
        tracing::info!("Minimal logging test: Info message after init_minimal_logging.");
    }

    #[test]
    fn test_init_logging_invalid_level_returns_error() {
        ensure_clean_logger_state();
        let config = LoggingConfig {
            level: "supertrace".to_string(),
            format: "text".to_string(),
        };
        let result = init_logging(&config, false);
        match result {
            Err(CoreError::LoggingInitialization(msg)) => {
                assert!(msg.contains("Invalid log level in config: supertrace"));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_init_logging_console_text_and_json() {
        ensure_clean_logger_state();
        let config_text = LoggingConfig {
            level: "info".to_string(),
            format: "text".to_string(),
        };
        // Reload mode: other tests may already have installed a subscriber.
        let result_text = init_logging(&config_text, true);
        assert!(result_text.is_ok(), "init_logging failed for console (text): {:?}", result_text.err());
        tracing::info!("Console logging test (text): Info message.");

        // Second init as reload must tolerate the already-set subscriber.
        let config_json = LoggingConfig {
            level: "info".to_string(),
            format: "json".to_string(),
        };
        let result_json = init_logging(&config_json, true);
        assert!(result_json.is_ok(), "Reloading logging should not error: {:?}", result_json.err());
    }
}
