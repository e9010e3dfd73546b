//! Command implementations for the kebun monitor CLI
//!
//! Each command loads the sheet (falling back to built-in data when it cannot
//! be used), drives the presenter, and renders or exports the result:
//! - `show`: every district
//! - `select`: one estate by id or code
//! - `export`: the table as CSV or JSON

pub mod export;
pub mod select;
pub mod shared;
pub mod show;

pub use shared::CommandSummary;

use tokio_util::sync::CancellationToken;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
pub async fn run(args: Args, cancellation: CancellationToken) -> Result<CommandSummary> {
    shared::setup_logging(&args.common)?;

    match args.get_command() {
        Commands::Show => show::run_show(&args.common, cancellation).await,
        Commands::Select(select_args) => {
            select::run_select(&args.common, &select_args, cancellation).await
        }
        Commands::Export(export_args) => {
            export::run_export(&args.common, &export_args, cancellation).await
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::cli::args::CommonArgs;

    /// A downloaded export in the current sheet layout with three estates
    pub fn sheet_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "DISTRIK,NO,SINGKATAN DISTRIK,SINGKATAN KEBUN,NAMA KEBUN").unwrap();
        writeln!(file, "DISTRIK A,1,DA,1KSD,KEBUN SEI DAUN,6,1000,500,200,100,,,400,250").unwrap();
        writeln!(file, "DISTRIK A,2,DA,2KMA,KEBUN MERBAU,4,800,400,50,25,,,800,0").unwrap();
        writeln!(file, "DISTRIK B,3,DB,3KPR,KEBUN PULAU RAJA,5,0,300,,,,,10,150").unwrap();
        file
    }

    pub fn common_args(file: &NamedTempFile) -> CommonArgs {
        CommonArgs {
            file: Some(file.path().to_path_buf()),
            page: 1,
            ..CommonArgs::default()
        }
    }
}
