//! Select command: focus on one estate

use colored::Colorize;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::shared::{CommandSummary, build_view, load_configuration, load_presenter};
use crate::Result;
use crate::cli::args::{CommonArgs, SelectArgs};

/// Focus on the requested estate; an unknown id leaves every district shown
pub async fn run_select(
    args: &CommonArgs,
    select_args: &SelectArgs,
    cancellation: CancellationToken,
) -> Result<CommandSummary> {
    let config = load_configuration(args)?;
    let (mut presenter, report) =
        load_presenter(&config, build_view(&config, args), cancellation).await?;

    let found = presenter.select(&select_args.id);
    if !found {
        warn!("Estate '{}' not found", select_args.id);
        println!(
            "{} no estate with id or code '{}'; showing all districts",
            "Note:".yellow().bold(),
            select_args.id
        );
    }

    println!();
    println!("{}", presenter.view().render());

    let mut summary = CommandSummary::from_report(&report);
    summary.selected = presenter.selected_id().map(str::to_string);
    Ok(summary)
}
