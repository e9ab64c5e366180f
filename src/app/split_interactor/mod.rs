// Split interactor - Orchestrates the scene splitting use case

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::exec_melt::MOTION_EST_FILTER;
use crate::app::cancel::CancelFlag;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::error::{SplitterError, SplitterResult};
use crate::ports::*;

/// Interactor for the split use case
pub struct SplitInteractor {
    melt_port: Arc<dyn MeltPort>,
    fs_port: Arc<dyn FsPort>,
    log_port: Arc<dyn LogPort>,
    strategy: Arc<dyn SegmentationStrategy>,
    settings: SplitSettings,
}

impl SplitInteractor {
    /// Create new split interactor with injected ports
    pub fn new(
        melt_port: Arc<dyn MeltPort>,
        fs_port: Arc<dyn FsPort>,
        log_port: Arc<dyn LogPort>,
        strategy: Arc<dyn SegmentationStrategy>,
        settings: SplitSettings,
    ) -> Self {
        Self {
            melt_port,
            fs_port,
            log_port,
            strategy,
            settings,
        }
    }

    /// Run pre-flight checks, then process every discovered file in order.
    ///
    /// Only pre-flight failures are returned as errors; per-file problems
    /// end up in the summary.
    pub async fn run(
        &self,
        request: &SplitRequest,
        cancel: &CancelFlag,
    ) -> SplitterResult<RunSummary> {
        self.preflight(request).await?;
        let input_files = self.discover(&request.input_path).await;

        self.log_port
            .info(&format!(
                "processing {} file(s) with strategy {}",
                input_files.len(),
                self.strategy.name()
            ))
            .await;

        let mut summary = RunSummary::default();
        for input_file in input_files {
            if cancel.is_cancelled() {
                self.log_port
                    .warn("cancelled, remaining files are not processed")
                    .await;
                summary.cancelled = true;
                break;
            }

            let outcome = self
                .process_file(&input_file, &request.output_dir, cancel)
                .await;
            let interrupted = outcome.state == FileState::Cancelled;
            summary.files.push(outcome);
            if interrupted {
                summary.cancelled = true;
                break;
            }
        }

        self.report(&summary).await;
        Ok(summary)
    }

    /// Validate input path, melt availability, melt capabilities and the
    /// output directory. Nothing is analysed before all of them pass.
    async fn preflight(&self, request: &SplitRequest) -> SplitterResult<()> {
        if !self.fs_port.exists(&request.input_path).await {
            return Err(SplitterError::InputNotFound {
                path: request.input_path.display().to_string(),
            });
        }

        let tool = self.melt_port.tool().to_string();
        let resolved = self
            .melt_port
            .locate()
            .map_err(|_| SplitterError::ToolNotFound { tool: tool.clone() })?;
        self.log_port
            .debug(&format!("using melt binary '{}'", resolved.display()))
            .await;

        let filters = self.melt_port.query_filters().await?;
        if !filters.iter().any(|filter| filter == MOTION_EST_FILTER) {
            return Err(SplitterError::MissingFilter {
                tool,
                filter: MOTION_EST_FILTER.to_string(),
            });
        }

        self.fs_port
            .prepare_output_dir(&request.output_dir)
            .await
            .map_err(SplitterError::from)?;

        Ok(())
    }

    /// A file is taken as-is; a directory is scanned and filtered by
    /// extension
    async fn discover(&self, input_path: &Path) -> Vec<PathBuf> {
        if !self.fs_port.is_dir(input_path).await {
            return vec![input_path.to_path_buf()];
        }

        let listing = self
            .fs_port
            .list_files(input_path, self.settings.recursive)
            .await;
        for unreadable in &listing.unreadable {
            self.log_port
                .warn(&format!("skipping unreadable entry {}", unreadable))
                .await;
        }

        let mut input_files = Vec::with_capacity(listing.files.len());
        for candidate in listing.files {
            if is_video_file(&candidate, &self.settings.video_extensions) {
                input_files.push(candidate);
            } else if self.strategy.accepts_produced_clips() && parse_clip_name(&candidate).is_some()
            {
                self.log_port
                    .debug(&format!("'{}' is a produced clip", candidate.display()))
                    .await;
                input_files.push(candidate);
            } else {
                self.log_port
                    .debug(&format!(
                        "skipping non-video file '{}' based on extension",
                        candidate.display()
                    ))
                    .await;
            }
        }
        input_files
    }

    /// Analyse, segment and encode one file
    pub async fn process_file(
        &self,
        input_file: &Path,
        output_dir: &Path,
        cancel: &CancelFlag,
    ) -> FileOutcome {
        let mut outcome = FileOutcome::new(input_file.to_path_buf());

        self.log_port
            .info(&format!(
                "finding scene split markers for file '{}'",
                input_file.display()
            ))
            .await;
        let analysis = match self.melt_port.analyze(input_file).await {
            Ok(analysis) => analysis,
            Err(e) => {
                self.log_port
                    .error(&format!("analysis of '{}' failed: {}", input_file.display(), e))
                    .await;
                return outcome.finish_with(FileState::FailedAnalysis, e.to_string());
            }
        };
        if !analysis.success() {
            self.log_port
                .error(&format!(
                    "melt analysis of '{}' exited with status {}, skipping input file:\n{}",
                    input_file.display(),
                    analysis.status_text(),
                    analysis.stderr
                ))
                .await;
            return outcome.finish_with(FileState::FailedAnalysis, analysis.stderr);
        }
        outcome.state = FileState::Analyzed;

        let intervals = match self.strategy.intervals(&analysis.stdout) {
            Ok(Some(intervals)) if !intervals.is_empty() => intervals,
            Ok(Some(_)) => {
                self.log_port
                    .info(&format!(
                        "fewer than two split markers for '{}', nothing to cut, skipping",
                        input_file.display()
                    ))
                    .await;
                return outcome.finish_with(FileState::SkippedNoMarkers, "fewer than two markers");
            }
            Ok(None) => {
                self.log_port
                    .info(&format!(
                        "no split result for '{}', skipping",
                        input_file.display()
                    ))
                    .await;
                return outcome.finish_with(FileState::SkippedNoMarkers, "no shot change markers");
            }
            Err(e) => {
                self.log_port
                    .error(&format!("{} for '{}', skipping", e, input_file.display()))
                    .await;
                return outcome.finish_with(FileState::FailedAnalysis, e.to_string());
            }
        };
        outcome.state = FileState::Segmented;
        self.log_port
            .info(&format!(
                "split file '{}' into {} clips",
                input_file.display(),
                intervals.len()
            ))
            .await;

        outcome.state = FileState::Encoding;
        for interval in intervals {
            if cancel.is_cancelled() {
                self.log_port
                    .warn(&format!(
                        "cancelled before interval {} of '{}'",
                        interval,
                        input_file.display()
                    ))
                    .await;
                outcome.state = FileState::Cancelled;
                return outcome;
            }

            if interval.is_degenerate() {
                self.log_port
                    .warn(&format!(
                        "skipping degenerate interval {} of '{}' caused by duplicate or decreasing markers",
                        interval,
                        input_file.display()
                    ))
                    .await;
                outcome.clips.push(ClipOutcome::SkippedDegenerate { interval });
                continue;
            }

            let output_path = self.strategy.output_path(
                output_dir,
                input_file,
                &interval,
                &self.settings.container_extension,
            );
            let clip = self.encode_with_retry(input_file, &interval, &output_path).await;
            outcome.clips.push(clip);
        }

        outcome.state = if outcome.failed().is_empty() {
            FileState::Done
        } else {
            FileState::FailedEncode
        };
        outcome
    }

    /// Encode one interval, retrying up to `encode_retries` extra times
    async fn encode_with_retry(
        &self,
        input_file: &Path,
        interval: &ClipInterval,
        output_path: &Path,
    ) -> ClipOutcome {
        let mut attempt = 0;
        loop {
            attempt += 1;
            self.log_port
                .debug(&format!(
                    "creating clip from frame {} to frame {} ({} frames) as '{}'",
                    interval.start,
                    interval.end,
                    interval.frame_count(),
                    output_path.display()
                ))
                .await;

            let clip = self
                .melt_port
                .encode(input_file, interval, output_path, &self.settings.encode_options)
                .await
                .unwrap_or_else(|e| ClipOutcome::Failed {
                    interval: *interval,
                    output_path: output_path.to_path_buf(),
                    status: None,
                    diagnostics: e.to_string(),
                });

            if let ClipOutcome::Failed {
                status, diagnostics, ..
            } = &clip
            {
                let status = status.map_or_else(|| "none".to_string(), |code| code.to_string());
                self.log_port
                    .error(&format!(
                        "encoding '{}' failed (attempt {}, status {}):\n{}",
                        output_path.display(),
                        attempt,
                        status,
                        diagnostics
                    ))
                    .await;
                if attempt <= self.settings.encode_retries {
                    continue;
                }
            }
            return clip;
        }
    }

    async fn report(&self, summary: &RunSummary) {
        self.log_port
            .info(&format!(
                "{} file(s) processed, {} skipped, {} failed, {} cancelled, {} clip(s) produced",
                summary.processed(),
                summary.skipped(),
                summary.failed(),
                summary.cancelled_files(),
                summary.produced_clips()
            ))
            .await;

        for file in &summary.files {
            match file.state {
                FileState::FailedAnalysis => {
                    self.log_port
                        .error(&format!(
                            "'{}': analysis failed: {}",
                            file.input_file.display(),
                            file.reason.as_deref().unwrap_or_default()
                        ))
                        .await;
                }
                FileState::FailedEncode | FileState::Cancelled if !file.failed().is_empty() => {
                    let failed: Vec<String> = file
                        .failed_intervals()
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    self.log_port
                        .error(&format!(
                            "'{}': {} clip(s) failed: {}",
                            file.input_file.display(),
                            failed.len(),
                            failed.join(", ")
                        ))
                        .await;
                }
                _ => {}
            }
        }

        if summary.cancelled {
            self.log_port.warn("run was cancelled").await;
        }
    }
}
