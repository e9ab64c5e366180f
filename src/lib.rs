//! video-splitter library
//!
//! Splits video files at scene boundaries. melt's `motion_est` filter
//! produces an XML report with shot-change markers; the markers become
//! contiguous frame intervals and each interval is encoded into its own
//! clip by a second melt invocation.
//!
//! The crate follows a ports and adapters layout:
//!
//! - [`domain`] holds the marker parser, the interval builder, naming rules
//!   and the segmentation strategies
//! - [`ports`] defines the process, melt, filesystem and logging seams
//! - [`adapters`] implements them with `tokio::process`, `walkdir`,
//!   `tracing` and `toml`
//! - [`app`] contains the orchestrator

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{CancelFlag, SplitInteractor};
pub use domain::errors::DomainError;
pub use domain::model::{
    ClipInterval, ClipOutcome, FileOutcome, FileState, FrameMarker, RunSummary, SplitRequest,
    SplitSettings,
};
pub use domain::rules::{build_intervals, parse_markers};
pub use error::{SplitterError, SplitterResult};
