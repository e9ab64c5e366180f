// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    BadArgs(String),
    /// Analysis report could not be interpreted
    MalformedReport(String),
    /// External tool could not be started
    ProcessSpawn(String),
    /// External tool is missing
    ToolUnavailable(String),
    /// External tool ran but reported failure
    ToolFailed(String),
    /// Output directory already has entries
    OutputDirNotEmpty(String),
    /// Path exists but is not a directory
    NotADirectory(String),
    /// File system operation failed
    FsFail(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::MalformedReport(msg) => write!(f, "Malformed analysis report: {}", msg),
            DomainError::ProcessSpawn(msg) => write!(f, "Failed to start process: {}", msg),
            DomainError::ToolUnavailable(msg) => write!(f, "Tool unavailable: {}", msg),
            DomainError::ToolFailed(msg) => write!(f, "Tool failed: {}", msg),
            DomainError::OutputDirNotEmpty(msg) => write!(f, "Output directory not empty: {}", msg),
            DomainError::NotADirectory(msg) => write!(f, "Not a directory: {}", msg),
            DomainError::FsFail(msg) => write!(f, "File system error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
