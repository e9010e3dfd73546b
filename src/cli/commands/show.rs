//! Show command: every district

use tokio_util::sync::CancellationToken;

use super::shared::{CommandSummary, build_view, load_configuration, load_presenter};
use crate::Result;
use crate::cli::args::CommonArgs;

pub async fn run_show(args: &CommonArgs, cancellation: CancellationToken) -> Result<CommandSummary> {
    let config = load_configuration(args)?;
    let (presenter, report) =
        load_presenter(&config, build_view(&config, args), cancellation).await?;

    println!();
    println!("{}", presenter.view().render());

    Ok(CommandSummary::from_report(&report))
}
