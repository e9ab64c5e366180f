// TOML config adapter - Configuration file loading

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::errors::*;

/// Values a config file may set; everything is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub melt: Option<String>,
    pub encode_options: Option<Vec<String>>,
    pub container_extension: Option<String>,
    pub video_extensions: Option<Vec<String>>,
    pub recursive: Option<bool>,
    pub include_trailing: Option<bool>,
    pub encode_retries: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    video_splitter: FileConfig,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Config file used when none is given explicitly:
    /// `$XDG_CONFIG_HOME/video-splitter/config.toml`, then
    /// `$HOME/.config/video-splitter/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(base.join("video-splitter").join("config.toml"))
    }

    /// Load `[video_splitter]` from a TOML file
    pub fn load(path: &Path) -> Result<FileConfig, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::FsFail(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }

    /// Load the explicit file, else the default file if it exists
    pub fn load_optional(explicit: Option<&Path>) -> Result<Option<FileConfig>, DomainError> {
        if let Some(path) = explicit {
            return Self::load(path).map(Some);
        }
        match Self::default_config_path() {
            Some(path) if path.is_file() => Self::load(&path).map(Some),
            _ => Ok(None),
        }
    }

    /// Parse TOML config content
    pub fn parse(toml_content: &str) -> Result<FileConfig, DomainError> {
        let document: ConfigDocument = toml::from_str(toml_content)
            .map_err(|e| DomainError::BadArgs(format!("Failed to parse TOML config: {}", e)))?;
        Ok(document.video_splitter)
    }
}
