//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::app::container::{AppContainer, DefaultAppContainer};
use crate::app::CancelFlag;
use crate::cli::Cli;
use crate::config_initialization::initialize_configuration_hierarchy;
use crate::domain::model::{RunSummary, SplitRequest};
use crate::domain::rules::StrategyKind;
use crate::utils::{init_logging, LoggingConfig};

/// Execute a split run for the parsed command line.
///
/// Returns an error only for fatal configuration problems; per-file
/// failures are part of the returned summary.
pub async fn run(cli: Cli, strategy: StrategyKind) -> Result<RunSummary> {
    let logging = LoggingConfig::new(cli.debug, cli.log_format);
    init_logging(&logging);

    let settings = initialize_configuration_hierarchy(&cli)?;
    info!(
        "Input: {}, output directory: {}, melt: {}",
        cli.input_path.display(),
        cli.output_dir_path.display(),
        settings.melt
    );

    let container = DefaultAppContainer::new(settings, strategy, logging.level);
    let interactor = container.split_interactor();

    let cancel = CancelFlag::new();
    cancel.cancel_on_ctrl_c();

    let request = SplitRequest::new(cli.input_path, cli.output_dir_path);
    let summary = interactor.run(&request, &cancel).await?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", json);
    }

    Ok(summary)
}
