//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading, and the load step every
//! command starts with.

use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::app::services::monitoring::{
    DatasetLoader, LoadOutcome, LoadReport, MonitoringPresenter,
};
use crate::app::services::sheet_source::{FileSheetSource, HttpSheetSource, SheetSource};
use crate::cli::args::CommonArgs;
use crate::cli::console::{ConsoleView, describe_load};
use crate::config::Config;
use crate::{Error, Result};

/// What a command did, for the caller's exit handling
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSummary {
    pub outcome: LoadOutcome,
    pub estates: usize,
    pub selected: Option<String>,
    pub exported: Option<PathBuf>,
}

impl CommandSummary {
    pub fn from_report(report: &LoadReport) -> Self {
        Self {
            outcome: report.outcome.clone(),
            estates: report.estates,
            selected: None,
            exported: None,
        }
    }
}

/// Set up structured logging to stderr
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kebun_monitor={}", log_level)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    match installed {
        Ok(()) => debug!("Logging initialized at level: {}", log_level),
        // A subscriber from an earlier run in this process stays in charge
        Err(e) => debug!("Keeping existing logging subscriber: {}", e),
    }
    Ok(())
}

/// Load configuration using the layered approach (file -> env -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    let config = match &args.config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    let config = args.apply_overrides(config.apply_env()?);
    config.validate()?;
    Ok(config)
}

/// Console sink configured from table settings
pub fn build_view(config: &Config, args: &CommonArgs) -> ConsoleView {
    ConsoleView::new(config.sort, config.pagination(), args.page)
}

/// Load the dataset into a fresh presenter
///
/// Fetch failures fall back to the built-in data and are not errors here;
/// only cancellation is.
pub async fn load_presenter(
    config: &Config,
    view: ConsoleView,
    cancellation: CancellationToken,
) -> Result<(MonitoringPresenter<ConsoleView>, LoadReport)> {
    match &config.source_file {
        Some(path) => load_with(FileSheetSource::new(path), config, view, cancellation).await,
        None => {
            let client = reqwest::Client::builder()
                .timeout(config.request_timeout())
                .build()
                .map_err(|e| Error::http("Failed to build HTTP client", e))?;
            let source = HttpSheetSource::with_client(client);
            load_with(source, config, view, cancellation).await
        }
    }
}

async fn load_with<S: SheetSource>(
    source: S,
    config: &Config,
    view: ConsoleView,
    cancellation: CancellationToken,
) -> Result<(MonitoringPresenter<ConsoleView>, LoadReport)> {
    let loader = DatasetLoader::new(source, config.sheet_ref(), config.column_layout())
        .with_cancellation(cancellation);

    let mut presenter = MonitoringPresenter::new(view);
    let report = presenter
        .load_from(&loader)
        .await
        .ok_or_else(|| Error::processing_interrupted("Load cancelled before the sheet arrived"))?;

    println!("{}", describe_load(&report));
    Ok((presenter, report))
}
