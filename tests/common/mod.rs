//! Test doubles shared by the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use video_splitter::adapters::{FsLocalAdapter, MeltAdapter};
use video_splitter::domain::rules::SegmentationStrategy;
use video_splitter::ports::{FsPort, LogLevel, LogPort, MeltPort, ProcessPort};
use video_splitter::{CancelFlag, DomainError, SplitInteractor, SplitSettings};
use video_splitter::domain::model::ProcessOutput;

pub const FILTER_LIST: &str = "---\nfilters:\n  - brightness\n  - motion_est\n  - vidstab\n...\n";

/// melt XML report with the markers under the playlist
pub fn marker_report(payload: &str, out: i64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<mlt LC_NUMERIC="C" version="6.26.1" root="/videos">
  <producer id="producer0" in="0" out="{out}">
    <property name="resource">input</property>
  </producer>
  <playlist id="playlist0">
    <property name="shot_change_list">{payload}</property>
    <entry producer="producer0" in="0" out="{out}"/>
  </playlist>
</mlt>"#
    )
}

pub fn report_without_markers(out: i64) -> String {
    format!(
        r#"<?xml version="1.0"?>
<mlt><producer id="producer0" in="0" out="{out}"><property name="resource">input</property></producer></mlt>"#
    )
}

/// Scripted stand-in for melt, answering by argument shape
pub struct ScriptedProcess {
    available: bool,
    filters: String,
    analyses: Mutex<HashMap<String, ProcessOutput>>,
    encode_failures: Mutex<HashMap<String, u32>>,
    cancel_after: Mutex<Option<(CancelFlag, usize)>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedProcess {
    pub fn new() -> Self {
        Self {
            available: true,
            filters: FILTER_LIST.to_string(),
            analyses: Mutex::new(HashMap::new()),
            encode_failures: Mutex::new(HashMap::new()),
            cancel_after: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn with_filters(mut self, filters: &str) -> Self {
        self.filters = filters.to_string();
        self
    }

    /// Successful analysis of the file named `file_name`
    pub fn with_report(self, file_name: &str, report: &str) -> Self {
        self.with_analysis(file_name, 0, report, "")
    }

    pub fn with_analysis(self, file_name: &str, status: i32, stdout: &str, stderr: &str) -> Self {
        self.analyses.lock().unwrap().insert(
            file_name.to_string(),
            ProcessOutput {
                status: Some(status),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Let the encode of clip `clip_name` fail `times` times
    pub fn failing_encode(self, clip_name: &str, times: u32) -> Self {
        self.encode_failures
            .lock()
            .unwrap()
            .insert(clip_name.to_string(), times);
        self
    }

    /// Trip `flag` once `encodes` encodes have completed
    pub fn cancel_after_encodes(self, flag: CancelFlag, encodes: usize) -> Self {
        *self.cancel_after.lock().unwrap() = Some((flag, encodes));
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn analysis_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|args| args.get(1).map(String::as_str) == Some("-attach"))
            .collect()
    }

    pub fn encode_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|args| args.get(1).map_or(false, |arg| arg.starts_with("in=")))
            .collect()
    }

    /// File names of all analysed inputs, in call order
    pub fn analysed_files(&self) -> Vec<String> {
        self.analysis_calls()
            .iter()
            .map(|args| file_name(&args[0]))
            .collect()
    }

    fn encode(&self, args: &[String]) -> ProcessOutput {
        let output_path = args[4].trim_start_matches("avformat:");
        let clip_name = file_name(output_path);

        let failed = {
            let mut failures = self.encode_failures.lock().unwrap();
            match failures.get_mut(&clip_name) {
                Some(remaining) if *remaining > 0 => {
                    *remaining -= 1;
                    true
                }
                _ => false,
            }
        };

        let done = self.encode_calls().len();
        if let Some((flag, encodes)) = self.cancel_after.lock().unwrap().as_ref() {
            if done >= *encodes {
                flag.cancel();
            }
        }

        if failed {
            ProcessOutput {
                status: Some(1),
                stdout: String::new(),
                stderr: format!("[consumer avformat] cannot write {}\n", clip_name),
            }
        } else {
            ProcessOutput {
                status: Some(0),
                stdout: String::new(),
                stderr: "[producer avformat] timestamp warning\n".to_string(),
            }
        }
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[async_trait]
impl ProcessPort for ScriptedProcess {
    async fn run(&self, _program: &str, args: &[String]) -> Result<ProcessOutput, DomainError> {
        self.calls.lock().unwrap().push(args.to_vec());

        if args.first().map(String::as_str) == Some("-query") {
            return Ok(ProcessOutput {
                status: Some(0),
                stdout: self.filters.clone(),
                stderr: String::new(),
            });
        }
        if args.get(1).map(String::as_str) == Some("-attach") {
            let name = file_name(&args[0]);
            let scripted = self.analyses.lock().unwrap().get(&name).cloned();
            return Ok(scripted.unwrap_or(ProcessOutput {
                status: Some(1),
                stdout: String::new(),
                stderr: format!("no analysis scripted for {}", name),
            }));
        }
        Ok(self.encode(args))
    }

    fn locate(&self, program: &str) -> Result<PathBuf, DomainError> {
        if self.available {
            Ok(PathBuf::from("/usr/bin").join(program))
        } else {
            Err(DomainError::ToolUnavailable(program.to_string()))
        }
    }
}

/// Log port that keeps every message for assertions
#[derive(Default)]
pub struct RecordingLog {
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLog {
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(recorded, _)| *recorded == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

#[async_trait]
impl LogPort for RecordingLog {
    async fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    async fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    async fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }

    async fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }

    async fn trace(&self, message: &str) {
        self.push(LogLevel::Trace, message);
    }
}

/// Interactor over the scripted process and the real filesystem adapter
pub fn interactor(
    process: Arc<ScriptedProcess>,
    strategy: Arc<dyn SegmentationStrategy>,
    settings: SplitSettings,
) -> (SplitInteractor, Arc<RecordingLog>) {
    let melt = Arc::new(MeltAdapter::new(settings.melt.clone(), process));
    let log = Arc::new(RecordingLog::default());
    let interactor = SplitInteractor::new(
        melt as Arc<dyn MeltPort>,
        Arc::new(FsLocalAdapter::new()) as Arc<dyn FsPort>,
        Arc::clone(&log) as Arc<dyn LogPort>,
        strategy,
        settings,
    );
    (interactor, log)
}

/// Create an empty file, including parent directories
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"").unwrap();
}
