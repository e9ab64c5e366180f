//! Configuration initialization and hierarchy management

use tracing::{debug, info};

use crate::adapters::toml_config::{FileConfig, TomlConfigAdapter};
use crate::cli::Cli;
use crate::domain::model::SplitSettings;
use crate::error::{SplitterError, SplitterResult};

/// Load the config file named on the command line (or the default one) and
/// resolve settings following precedence: CLI > Env > File > Defaults.
///
/// Environment variables are folded into the CLI values by clap.
pub fn initialize_configuration_hierarchy(cli: &Cli) -> SplitterResult<SplitSettings> {
    let file = TomlConfigAdapter::load_optional(cli.config.as_deref()).map_err(|e| {
        SplitterError::Config {
            message: e.to_string(),
        }
    })?;
    match (&file, &cli.config) {
        (Some(_), Some(path)) => info!("Loaded configuration from: {}", path.display()),
        (Some(_), None) => info!("Loaded default configuration file"),
        _ => debug!("No configuration file loaded"),
    }

    resolve_settings(cli, file.unwrap_or_default())
}

/// Merge CLI values over file values over defaults and validate the result
pub fn resolve_settings(cli: &Cli, file: FileConfig) -> SplitterResult<SplitSettings> {
    let defaults = SplitSettings::default();

    let encode_options = if !cli.melt_command_tail.is_empty() {
        cli.melt_command_tail.clone()
    } else {
        file.encode_options.unwrap_or(defaults.encode_options)
    };

    let video_extensions = file
        .video_extensions
        .map(|extensions| {
            extensions
                .into_iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect()
        })
        .unwrap_or(defaults.video_extensions);

    let container_extension = cli
        .container_extension
        .clone()
        .or(file.container_extension)
        .unwrap_or(defaults.container_extension);
    if container_extension.is_empty() || container_extension.starts_with('.') {
        return Err(SplitterError::Config {
            message: format!(
                "container extension must be a bare extension such as 'avi', got '{}'",
                container_extension
            ),
        });
    }

    Ok(SplitSettings {
        melt: cli.melt.clone().or(file.melt).unwrap_or(defaults.melt),
        encode_options,
        container_extension,
        video_extensions,
        recursive: cli.recursive || file.recursive.unwrap_or(defaults.recursive),
        include_trailing: cli.include_trailing
            || file.include_trailing.unwrap_or(defaults.include_trailing),
        encode_retries: cli
            .encode_retries
            .or(file.encode_retries)
            .unwrap_or(defaults.encode_retries),
    })
}
