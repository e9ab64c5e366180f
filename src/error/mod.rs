//! Error handling module for video-splitter
//!
//! Errors in this module abort the whole run before any input file is
//! touched. Per-file problems never surface here; they are reported through
//! [`crate::domain::model::FileOutcome`].

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Fatal configuration error for a splitter run
#[derive(Error, Debug)]
pub enum SplitterError {
    /// melt binary not found on PATH or at the given location
    #[error("melt binary not found: {tool}")]
    ToolNotFound { tool: String },

    /// melt was built without the filter required for segmentation
    #[error("melt binary '{tool}' does not provide the required filter '{filter}'")]
    MissingFilter { tool: String, filter: String },

    /// Capability query could not be run or returned an error
    #[error("capability query failed: {message}")]
    CapabilityQuery { message: String },

    /// Input path does not exist
    #[error("input path '{path}' doesn't exist")]
    InputNotFound { path: String },

    /// Output directory exists and contains entries
    #[error("output directory '{path}' exists and is not empty")]
    OutputDirNotEmpty { path: String },

    /// Output path exists but is not a directory
    #[error("output path '{path}' isn't a directory")]
    OutputNotDirectory { path: String },

    /// Configuration file or value problem
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Other file system failure during pre-flight
    #[error("file system error: {message}")]
    Fs { message: String },
}

impl From<DomainError> for SplitterError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::ToolUnavailable(tool) => SplitterError::ToolNotFound { tool },
            DomainError::BadArgs(message) => SplitterError::Config { message },
            DomainError::OutputDirNotEmpty(path) => SplitterError::OutputDirNotEmpty { path },
            DomainError::NotADirectory(path) => SplitterError::OutputNotDirectory { path },
            DomainError::FsFail(message) => SplitterError::Fs { message },
            other => SplitterError::CapabilityQuery {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias for splitter runs
pub type SplitterResult<T> = std::result::Result<T, SplitterError>;
