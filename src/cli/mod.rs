//! CLI module for video-splitter
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

use crate::utils::LogFormat;

pub mod commands;

/// Split video files at scene changes detected by melt's motion_est filter.
///
/// Trailing arguments after `--` are appended verbatim to every melt encode
/// invocation, e.g. `-- vcodec=libx264 acodec=aac b=1000k`.
#[derive(Parser, Debug, Clone)]
#[command(name = "video-splitter")]
#[command(about = "Split video files at scene changes using melt's motion_est filter")]
#[command(version)]
pub struct Cli {
    /// A file to be processed or a directory of which all contained video
    /// files will be processed (non-video files are ignored)
    pub input_path: PathBuf,

    /// Directory the resulting clips are written to; created if absent,
    /// must be empty if it exists
    pub output_dir_path: PathBuf,

    /// Path to a melt binary [default: melt]
    #[arg(long, env = "VIDEO_SPLITTER_MELT")]
    pub melt: Option<String>,

    /// Process video files in subdirectories of input_path as well
    #[arg(short, long)]
    pub recursive: bool,

    /// Enable debugging messages
    #[arg(long)]
    pub debug: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// TOML configuration file
    #[arg(long, env = "VIDEO_SPLITTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extension of produced clips [default: avi]
    #[arg(long, env = "VIDEO_SPLITTER_CONTAINER_EXTENSION")]
    pub container_extension: Option<String>,

    /// Also encode the segment between the last marker and the end of the file
    #[arg(long)]
    pub include_trailing: bool,

    /// Extra attempts for a failed clip encode [default: 0]
    #[arg(long, env = "VIDEO_SPLITTER_ENCODE_RETRIES")]
    pub encode_retries: Option<u32>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Options appended to every melt encode invocation
    /// [default: vcodec=mpeg4 acodec=libmp3lame]
    #[arg(last = true, value_name = "MELT_COMMAND_TAIL")]
    pub melt_command_tail: Vec<String>,
}
