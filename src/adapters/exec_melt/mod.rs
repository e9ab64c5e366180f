//! melt execution adapter
//!
//! Builds the melt command lines for the capability query, the motion_est
//! analysis and the per-clip encode, and runs them through a [`ProcessPort`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Filter melt needs for shot-change detection
pub const MOTION_EST_FILTER: &str = "motion_est";

/// melt-based execution adapter
pub struct MeltAdapter {
    tool: String,
    process_port: Arc<dyn ProcessPort>,
}

impl MeltAdapter {
    /// Create new melt adapter for the given binary
    pub fn new(tool: impl Into<String>, process_port: Arc<dyn ProcessPort>) -> Self {
        Self {
            tool: tool.into(),
            process_port,
        }
    }

    /// `-query filter`
    pub fn query_args() -> Vec<String> {
        vec!["-query".to_string(), "filter".to_string()]
    }

    /// `<input> -attach motion_est -consumer xml all=1`
    pub fn analysis_args(input_file: &Path) -> Vec<String> {
        vec![
            input_file.to_string_lossy().into_owned(),
            "-attach".to_string(),
            MOTION_EST_FILTER.to_string(),
            "-consumer".to_string(),
            "xml".to_string(),
            "all=1".to_string(),
        ]
    }

    /// `<input> in=<start> out=<end> -consumer avformat:<output> <options...>`
    pub fn encode_args(
        input_file: &Path,
        interval: &ClipInterval,
        output_path: &Path,
        encode_options: &[String],
    ) -> Vec<String> {
        let mut args = vec![
            input_file.to_string_lossy().into_owned(),
            format!("in={}", interval.start),
            format!("out={}", interval.end),
            "-consumer".to_string(),
            format!("avformat:{}", output_path.to_string_lossy()),
        ];
        args.extend(encode_options.iter().cloned());
        args
    }

    /// Filter names from `melt -query filter` output.
    ///
    /// melt prints a YAML-ish list (`  - motion_est`); leading whitespace and
    /// dashes are stripped from every line.
    pub fn parse_filter_list(output: &str) -> Vec<String> {
        output
            .lines()
            .map(|line| line.trim_start_matches(|c: char| c == '-' || c.is_whitespace()))
            .map(str::trim_end)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[async_trait]
impl MeltPort for MeltAdapter {
    fn tool(&self) -> &str {
        &self.tool
    }

    fn locate(&self) -> Result<PathBuf, DomainError> {
        self.process_port.locate(&self.tool)
    }

    async fn query_filters(&self) -> Result<Vec<String>, DomainError> {
        let output = self.process_port.run(&self.tool, &Self::query_args()).await?;
        if !output.success() {
            return Err(DomainError::ToolFailed(format!(
                "'{} -query filter' exited with status {}: {}",
                self.tool,
                output.status_text(),
                output.stderr
            )));
        }
        Ok(Self::parse_filter_list(&output.stdout))
    }

    async fn analyze(&self, input_file: &Path) -> Result<ProcessOutput, DomainError> {
        self.process_port
            .run(&self.tool, &Self::analysis_args(input_file))
            .await
    }

    async fn encode(
        &self,
        input_file: &Path,
        interval: &ClipInterval,
        output_path: &Path,
        encode_options: &[String],
    ) -> Result<ClipOutcome, DomainError> {
        let args = Self::encode_args(input_file, interval, output_path, encode_options);
        let output = self.process_port.run(&self.tool, &args).await?;

        if output.success() {
            Ok(ClipOutcome::Produced {
                interval: *interval,
                output_path: output_path.to_path_buf(),
            })
        } else {
            Ok(ClipOutcome::Failed {
                interval: *interval,
                output_path: output_path.to_path_buf(),
                status: output.status,
                diagnostics: output.stderr,
            })
        }
    }
}
