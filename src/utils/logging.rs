//! Logging configuration and subscriber setup

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::ports::LogLevel;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for structured logging
    Json,
}

/// Logging configuration options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Global log level
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(debug: bool, format: LogFormat) -> Self {
        Self {
            level: LogLevel::from_debug_flag(debug),
            format,
        }
    }

    /// `RUST_LOG` wins over the level chosen on the command line
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.as_directive()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(false, LogFormat::Text)
    }
}

/// Install the global subscriber, writing to stderr. Calling it again is a
/// no-op.
pub fn init_logging(config: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Text => builder.without_time().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_debug_flag() {
        assert_eq!(LoggingConfig::new(true, LogFormat::Json).level, LogLevel::Debug);
        assert_eq!(LoggingConfig::default().level, LogLevel::Info);
        assert_eq!(LoggingConfig::default().format, LogFormat::Text);
    }
}
