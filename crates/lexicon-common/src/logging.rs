//! Structured logging setup for Lexicon binaries.
//!
//! The library crates only emit `tracing` events. Installing a subscriber is
//! left to the host application; this module provides the one used by the
//! Lexicon CLI.

use crate::{LexiconError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "lexicon=debug")
    pub level: String,
    /// Whether to emit one JSON object per event
    pub json_format: bool,
    /// Whether to use the multi-line pretty formatter
    pub pretty_format: bool,
    /// Whether to include target module information
    pub include_targets: bool,
    /// Whether to include thread names, useful to tell watcher events apart
    pub include_thread_names: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            include_targets: true,
            include_thread_names: false,
        }
    }
}

impl LoggingConfig {
    /// Development preset: debug level, pretty output.
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            pretty_format: true,
            include_thread_names: true,
            ..Self::default()
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level` when set. Fails if a
/// global subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| LexiconError::config(format!("invalid log filter: {e}")))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(config.include_targets)
                    .with_thread_names(config.include_thread_names),
            )
            .try_init()
    } else if config.pretty_format {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(config.include_targets)
                    .with_thread_names(config.include_thread_names),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(config.include_targets)
                    .with_thread_names(config.include_thread_names),
            )
            .try_init()
    };

    result.map_err(|e| LexiconError::config(format!("logging already initialized: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json_format);
        assert!(!config.pretty_format);
        assert!(config.include_targets);
        assert!(!config.include_thread_names);
    }

    #[test]
    fn test_development_config() {
        let config = LoggingConfig::development();
        assert_eq!(config.level, "debug");
        assert!(config.pretty_format);
        assert!(config.include_thread_names);
    }
}
