//! Process adapter backed by `tokio::process`

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::trace;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Runs external programs with captured stdout and stderr
#[derive(Debug, Default, Clone)]
pub struct TokioProcessAdapter;

impl TokioProcessAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessPort for TokioProcessAdapter {
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, DomainError> {
        trace!("running {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| DomainError::ProcessSpawn(format!("{}: {}", program, e)))?;

        Ok(ProcessOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn locate(&self, program: &str) -> Result<PathBuf, DomainError> {
        which::which(program)
            .map_err(|e| DomainError::ToolUnavailable(format!("{} ({})", program, e)))
    }
}
