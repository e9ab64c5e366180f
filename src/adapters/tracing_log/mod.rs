// Tracing log adapter - Structured logging using tracing crate

use async_trait::async_trait;
use tracing::{debug, error, info, trace, warn};

use crate::ports::*;

/// Tracing log adapter
///
/// The threshold is fixed when the adapter is built; the global subscriber
/// is installed separately by [`crate::utils::logging::init_logging`].
#[derive(Debug, Clone)]
pub struct TracingLogAdapter {
    current_level: LogLevel,
}

impl TracingLogAdapter {
    /// Create new tracing log adapter
    pub fn new(level: LogLevel) -> Self {
        Self {
            current_level: level,
        }
    }

    /// Check if log level should be logged
    fn should_log(&self, level: LogLevel) -> bool {
        level >= self.current_level
    }
}

impl Default for TracingLogAdapter {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

#[async_trait]
impl LogPort for TracingLogAdapter {
    async fn info(&self, message: &str) {
        if self.should_log(LogLevel::Info) {
            info!("{}", message);
        }
    }

    async fn warn(&self, message: &str) {
        if self.should_log(LogLevel::Warn) {
            warn!("{}", message);
        }
    }

    async fn error(&self, message: &str) {
        if self.should_log(LogLevel::Error) {
            error!("{}", message);
        }
    }

    async fn debug(&self, message: &str) {
        if self.should_log(LogLevel::Debug) {
            debug!("{}", message);
        }
    }

    async fn trace(&self, message: &str) {
        if self.should_log(LogLevel::Trace) {
            trace!("{}", message);
        }
    }
}
