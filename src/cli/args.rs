//! Command-line argument definitions for the kebun monitor
//!
//! This module defines the CLI interface using the clap derive API. Sheet,
//! table, and logging options are global so they may appear before or after
//! the subcommand.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::services::sheet_parser::LayoutKind;
use crate::app::services::table_view::{ExportFormat, SortConfig, SortDirection, SortKey};
use crate::config::Config;
use crate::constants::DEFAULT_EXPORT_STEM;

/// CLI arguments for the kebun fertilization monitor
///
/// Loads the fertilization monitoring sheet, groups estates by district, and
/// shows plan against realization for NPK and Dolomit.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "kebun-monitor",
    version,
    about = "Monitor estate fertilization plans against realization",
    long_about = "Loads the fertilization monitoring sheet (published spreadsheet CSV export or a \
                  downloaded copy), groups estates by district, and shows plan, stock, remaining, \
                  and realized NPK and Dolomit as a table, chart totals, and map markers. \
                  Falls back to a built-in dataset whenever the sheet cannot be used."
)]
pub struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show every district (default command)
    Show,
    /// Focus on one estate by id or code
    Select(SelectArgs),
    /// Export the table as CSV or JSON
    Export(ExportArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CommonArgs {
    /// JSON configuration file
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_file: Option<PathBuf>,

    /// Read a downloaded CSV export instead of fetching the sheet
    #[arg(short = 'f', long = "file", value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// Sheet column layout
    #[arg(
        long = "layout",
        value_name = "LAYOUT",
        global = true,
        help = "Sheet column layout (sheet-export, legacy-planning)"
    )]
    pub layout: Option<LayoutKind>,

    /// Spreadsheet document id
    #[arg(long = "doc-id", value_name = "ID", global = true)]
    pub doc_id: Option<String>,

    /// Sheet tab id
    #[arg(long = "gid", value_name = "GID", global = true)]
    pub gid: Option<String>,

    /// First data row, overriding the layout's default
    #[arg(long = "start-row", value_name = "ROW", global = true)]
    pub start_row: Option<usize>,

    /// Table column to sort by
    #[arg(
        short = 's',
        long = "sort",
        value_name = "COLUMN",
        global = true,
        help = "Sort column key, e.g. nama_kebun, rencanaNPK, realVsRencanaDolomit"
    )]
    pub sort: Option<SortKey>,

    /// Sort descending
    #[arg(long = "desc", global = true)]
    pub desc: bool,

    /// Table page to show
    #[arg(short = 'p', long = "page", value_name = "N", default_value_t = 1, global = true)]
    pub page: usize,

    /// Rows per table page
    #[arg(long = "rows-per-page", value_name = "N", global = true)]
    pub rows_per_page: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress logging except errors"
    )]
    pub quiet: bool,
}

/// Arguments for the select command
#[derive(Debug, Clone, clap::Args)]
pub struct SelectArgs {
    /// Estate id or code
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the export command
#[derive(Debug, Clone, clap::Args)]
pub struct ExportArgs {
    /// Export encoding
    #[arg(long = "format", value_name = "FORMAT", default_value = "csv")]
    pub format: ExportFormat,

    /// Output file, defaults to data_kebun.<format>
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export only the estate with this id or code
    #[arg(long = "select", value_name = "ID")]
    pub select: Option<String>,
}

impl Args {
    /// Get the command to run, defaulting to `show`
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Show)
    }
}

impl CommonArgs {
    /// Determine the log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Layer explicitly given flags over `config`
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(file) = &self.file {
            config.source_file = Some(file.clone());
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(doc_id) = &self.doc_id {
            config.doc_id = doc_id.clone();
        }
        if let Some(gid) = &self.gid {
            config.gid = gid.clone();
        }
        if let Some(start_row) = self.start_row {
            config.start_row = Some(start_row);
        }
        if let Some(rows_per_page) = self.rows_per_page {
            config.rows_per_page = rows_per_page;
        }

        let key = self.sort.unwrap_or(config.sort.key);
        let direction = if self.desc {
            SortDirection::Descending
        } else if self.sort.is_some() {
            SortDirection::Ascending
        } else {
            config.sort.direction
        };
        config.sort = SortConfig::new(key, direction);

        config
    }
}

impl ExportArgs {
    /// Output path, derived from the format when not given
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{}.{}", DEFAULT_EXPORT_STEM, self.format.extension()))
        })
    }
}
