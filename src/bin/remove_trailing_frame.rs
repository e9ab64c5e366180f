//! Re-encodes clips made by video-splitter releases before 1.2 without the
//! trailing frame those releases appended by accident.

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};

use video_splitter::cli::{commands, Cli};
use video_splitter::domain::rules::StrategyKind;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::command()
        .name("video-splitter-remove-trailing-frame")
        .about("Remove the trailing frame added to clips by video-splitter before 1.2")
        .get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    commands::run(cli, StrategyKind::TrailingFrameRemoval).await?;
    Ok(())
}
