// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for running external programs.
///
/// Every invocation (capability query, analysis, encode) goes through this
/// one primitive. Both output streams are always captured.
#[async_trait]
pub trait ProcessPort: Send + Sync {
    /// Run `program` with `args` to completion
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, DomainError>;

    /// Resolve `program` to an executable, searching PATH for bare names
    fn locate(&self, program: &str) -> Result<PathBuf, DomainError>;
}

/// Port for the melt invocations of a split run
#[async_trait]
pub trait MeltPort: Send + Sync {
    /// Configured melt binary
    fn tool(&self) -> &str;

    /// Check that the melt binary can be found
    fn locate(&self) -> Result<PathBuf, DomainError>;

    /// Names of all filters melt was built with
    async fn query_filters(&self) -> Result<Vec<String>, DomainError>;

    /// Run the motion_est analysis; stdout of the result is the XML report
    async fn analyze(&self, input_file: &Path) -> Result<ProcessOutput, DomainError>;

    /// Encode one interval of `input_file` into `output_path`
    async fn encode(
        &self,
        input_file: &Path,
        interval: &ClipInterval,
        output_path: &Path,
        encode_options: &[String],
    ) -> Result<ClipOutcome, DomainError>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if path exists
    async fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    async fn is_dir(&self, path: &Path) -> bool;

    /// Files below `dir`: direct children, or all descendants if `recursive`.
    /// Sorted by path. Entries that cannot be read are reported in
    /// `unreadable` instead of failing the listing.
    async fn list_files(&self, dir: &Path, recursive: bool) -> DirectoryListing;

    /// Create `dir` if absent; fail if it exists and is not empty
    async fn prepare_output_dir(&self, dir: &Path) -> Result<(), DomainError>;
}

/// Port for logging
#[async_trait]
pub trait LogPort: Send + Sync {
    /// Log info message
    async fn info(&self, message: &str);

    /// Log warning message
    async fn warn(&self, message: &str);

    /// Log error message
    async fn error(&self, message: &str);

    /// Log debug message
    async fn debug(&self, message: &str);

    /// Log trace message
    async fn trace(&self, message: &str);
}

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Level selected by the `--debug` flag
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
