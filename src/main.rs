//! video-splitter
//!
//! Splits video files into clips at the scene changes melt's `motion_est`
//! filter detects.
//!
//! # Usage
//!
//! ```bash
//! video-splitter recording.mp4 clips/
//! video-splitter --recursive --debug videos/ clips/ -- vcodec=libx264 acodec=aac
//! ```

use anyhow::Result;
use clap::Parser;

use video_splitter::cli::{commands, Cli};
use video_splitter::domain::rules::StrategyKind;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::run(cli, StrategyKind::SceneSplit).await?;
    Ok(())
}
