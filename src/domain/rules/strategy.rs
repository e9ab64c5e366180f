//! Segmentation strategies
//!
//! A strategy turns one analysis report into the intervals to encode and
//! decides where each clip is written. The orchestrator is shared by all
//! strategies.

use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;
use crate::domain::model::ClipInterval;
use crate::domain::rules::intervals::{build_intervals, trailing_interval};
use crate::domain::rules::markers::{parse_markers, parse_producer_out};
use crate::domain::rules::naming::{clip_output_path, same_name_output_path};

/// Plans the clips of one input file
pub trait SegmentationStrategy: Send + Sync {
    /// Short name for log messages
    fn name(&self) -> &'static str;

    /// Intervals to encode for `report`.
    ///
    /// `Ok(None)` means the report carries no segmentation for this file.
    /// An empty list means there is nothing to cut.
    fn intervals(&self, report: &str) -> Result<Option<Vec<ClipInterval>>, DomainError>;

    /// Output path of the clip for `interval`
    fn output_path(
        &self,
        output_dir: &Path,
        input_file: &Path,
        interval: &ClipInterval,
        container_extension: &str,
    ) -> PathBuf;

    /// Whether directory discovery also takes clips named by
    /// [`clip_output_path`] regardless of their extension
    fn accepts_produced_clips(&self) -> bool {
        false
    }
}

/// Which strategy a binary runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    SceneSplit,
    TrailingFrameRemoval,
}

impl StrategyKind {
    pub fn build(self, include_trailing: bool) -> Box<dyn SegmentationStrategy> {
        match self {
            StrategyKind::SceneSplit => Box::new(SceneSplit::new(include_trailing)),
            StrategyKind::TrailingFrameRemoval => Box::new(TrailingFrameRemoval),
        }
    }
}

/// Cut at every shot-change marker
#[derive(Debug, Clone, Default)]
pub struct SceneSplit {
    include_trailing: bool,
}

impl SceneSplit {
    pub fn new(include_trailing: bool) -> Self {
        Self { include_trailing }
    }
}

impl SegmentationStrategy for SceneSplit {
    fn name(&self) -> &'static str {
        "scene-split"
    }

    fn intervals(&self, report: &str) -> Result<Option<Vec<ClipInterval>>, DomainError> {
        let markers = match parse_markers(report)? {
            Some(markers) => markers,
            None => return Ok(None),
        };

        let mut intervals = build_intervals(&markers);
        if self.include_trailing {
            let last_frame = parse_producer_out(report)?;
            if let Some(last_marker) = markers.last() {
                intervals.extend(trailing_interval(*last_marker, last_frame));
            }
        }
        Ok(Some(intervals))
    }

    fn output_path(
        &self,
        output_dir: &Path,
        input_file: &Path,
        interval: &ClipInterval,
        container_extension: &str,
    ) -> PathBuf {
        clip_output_path(output_dir, input_file, interval, container_extension)
    }
}

/// Re-encode each file whole without its last frame.
///
/// Splitter releases before 1.2 ended every clip on the next clip's first
/// frame; the clips they produced are repaired by encoding `[0, out - 1]`
/// under the original name.
#[derive(Debug, Clone, Default)]
pub struct TrailingFrameRemoval;

impl SegmentationStrategy for TrailingFrameRemoval {
    fn name(&self) -> &'static str {
        "remove-trailing-frame"
    }

    fn intervals(&self, report: &str) -> Result<Option<Vec<ClipInterval>>, DomainError> {
        let out = parse_producer_out(report)?;
        Ok(Some(vec![ClipInterval::new(0, out - 1)]))
    }

    fn output_path(
        &self,
        output_dir: &Path,
        input_file: &Path,
        _interval: &ClipInterval,
        _container_extension: &str,
    ) -> PathBuf {
        same_name_output_path(output_dir, input_file)
    }

    fn accepts_produced_clips(&self) -> bool {
        true
    }
}
