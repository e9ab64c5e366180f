// Domain models - Core types and data structures

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Frame index of a detected scene boundary.
///
/// Parsed markers are never negative. The type is signed so that the
/// `next - 1` boundary adjustment cannot underflow on degenerate input.
pub type FrameMarker = i64;

/// Inclusive frame range encoded as one output clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClipInterval {
    pub start: FrameMarker,
    pub end: FrameMarker,
}

impl ClipInterval {
    /// Create a new interval; degenerate ranges are allowed and detectable
    pub fn new(start: FrameMarker, end: FrameMarker) -> Self {
        Self { start, end }
    }

    /// An interval whose end lies before its start, produced by duplicate
    /// or decreasing markers
    pub fn is_degenerate(&self) -> bool {
        self.end < self.start
    }

    /// Number of frames covered, zero for degenerate intervals
    pub fn frame_count(&self) -> u64 {
        if self.is_degenerate() {
            0
        } else {
            (self.end - self.start + 1) as u64
        }
    }
}

impl fmt::Display for ClipInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Captured result of one external process run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Exit status for log messages
    pub fn status_text(&self) -> String {
        match self.status {
            Some(code) => code.to_string(),
            None => "signal".to_string(),
        }
    }
}

/// Result of encoding one interval
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClipOutcome {
    /// Encode exited with status zero
    Produced {
        interval: ClipInterval,
        output_path: PathBuf,
    },
    /// Encode exited non-zero or could not be started
    Failed {
        interval: ClipInterval,
        output_path: PathBuf,
        status: Option<i32>,
        /// stderr of the encode process, verbatim
        diagnostics: String,
    },
    /// Degenerate interval, no encode attempted
    SkippedDegenerate { interval: ClipInterval },
}

impl ClipOutcome {
    pub fn interval(&self) -> &ClipInterval {
        match self {
            ClipOutcome::Produced { interval, .. }
            | ClipOutcome::Failed { interval, .. }
            | ClipOutcome::SkippedDegenerate { interval } => interval,
        }
    }

    pub fn is_produced(&self) -> bool {
        matches!(self, ClipOutcome::Produced { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ClipOutcome::Failed { .. })
    }
}

/// Per-file processing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileState {
    Discovered,
    Analyzed,
    Segmented,
    Encoding,
    Done,
    SkippedNoMarkers,
    FailedAnalysis,
    FailedEncode,
    /// Cancellation was requested between two intervals of this file
    Cancelled,
}

impl FileState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FileState::Done
                | FileState::SkippedNoMarkers
                | FileState::FailedAnalysis
                | FileState::FailedEncode
                | FileState::Cancelled
        )
    }
}

/// Aggregated result for one input file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    pub input_file: PathBuf,
    pub state: FileState,
    pub clips: Vec<ClipOutcome>,
    /// File-level reason for `FailedAnalysis` or `SkippedNoMarkers`
    pub reason: Option<String>,
}

impl FileOutcome {
    pub fn new(input_file: PathBuf) -> Self {
        Self {
            input_file,
            state: FileState::Discovered,
            clips: Vec::new(),
            reason: None,
        }
    }

    /// Move to a terminal state with a file-level reason
    pub fn finish_with(mut self, state: FileState, reason: impl Into<String>) -> Self {
        self.state = state;
        self.reason = Some(reason.into());
        self
    }

    /// Paths of all clips that were written
    pub fn produced(&self) -> Vec<&PathBuf> {
        self.clips
            .iter()
            .filter_map(|clip| match clip {
                ClipOutcome::Produced { output_path, .. } => Some(output_path),
                _ => None,
            })
            .collect()
    }

    pub fn produced_intervals(&self) -> Vec<ClipInterval> {
        self.clips
            .iter()
            .filter(|clip| clip.is_produced())
            .map(|clip| *clip.interval())
            .collect()
    }

    pub fn failed(&self) -> Vec<&ClipOutcome> {
        self.clips.iter().filter(|clip| clip.is_failed()).collect()
    }

    pub fn failed_intervals(&self) -> Vec<ClipInterval> {
        self.failed().iter().map(|clip| *clip.interval()).collect()
    }

    pub fn degenerate_intervals(&self) -> Vec<ClipInterval> {
        self.clips
            .iter()
            .filter(|clip| matches!(clip, ClipOutcome::SkippedDegenerate { .. }))
            .map(|clip| *clip.interval())
            .collect()
    }
}

/// Outcome of a whole run
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RunSummary {
    pub files: Vec<FileOutcome>,
    pub cancelled: bool,
}

impl RunSummary {
    fn count(&self, states: &[FileState]) -> usize {
        self.files
            .iter()
            .filter(|file| states.contains(&file.state))
            .count()
    }

    /// Files whose intervals were all encoded
    pub fn processed(&self) -> usize {
        self.count(&[FileState::Done])
    }

    pub fn skipped(&self) -> usize {
        self.count(&[FileState::SkippedNoMarkers])
    }

    /// Files that failed, including a cancelled file with a failed clip
    pub fn failed(&self) -> usize {
        self.files
            .iter()
            .filter(|file| match file.state {
                FileState::FailedAnalysis | FileState::FailedEncode => true,
                FileState::Cancelled => !file.failed().is_empty(),
                _ => false,
            })
            .count()
    }

    pub fn cancelled_files(&self) -> usize {
        self.count(&[FileState::Cancelled])
    }

    pub fn produced_clips(&self) -> usize {
        self.files.iter().map(|file| file.produced().len()).sum()
    }
}

/// Components of a clip file name `<head>-<start>-<end>.<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipName {
    pub head: String,
    pub start: FrameMarker,
    pub end: FrameMarker,
    pub extension: String,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSettings {
    /// melt binary name or path
    pub melt: String,
    /// Opaque tokens appended to every encode invocation
    pub encode_options: Vec<String>,
    /// Extension of produced clips
    pub container_extension: String,
    /// Lower-case extensions recognised as video when scanning directories
    pub video_extensions: Vec<String>,
    pub recursive: bool,
    /// Also encode the segment from the last marker to the end of the media
    pub include_trailing: bool,
    /// Extra attempts for a failed encode
    pub encode_retries: u32,
}

pub const DEFAULT_MELT: &str = "melt";
pub const DEFAULT_CONTAINER_EXTENSION: &str = "avi";
pub const DEFAULT_ENCODE_OPTIONS: &[&str] = &["vcodec=mpeg4", "acodec=libmp3lame"];
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["flv", "mp4"];

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            melt: DEFAULT_MELT.to_string(),
            encode_options: DEFAULT_ENCODE_OPTIONS.iter().map(|s| s.to_string()).collect(),
            container_extension: DEFAULT_CONTAINER_EXTENSION.to_string(),
            video_extensions: DEFAULT_VIDEO_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            recursive: false,
            include_trailing: false,
            encode_retries: 0,
        }
    }
}

/// Paths for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRequest {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
}

impl SplitRequest {
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
        }
    }
}

/// Files found below an input directory
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryListing {
    pub files: Vec<PathBuf>,
    /// Entries that could not be read, with the reason
    pub unreadable: Vec<String>,
}
