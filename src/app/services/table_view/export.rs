//! Table export encoders
//!
//! All encoders take the same [`TableRow`] projection the table shows, so
//! exported figures always match the screen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tabled::{Table, settings::Style};
use tracing::info;

use super::rows::TableRow;
use crate::{Error, Result};

/// Supported export encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(Error::export(format!(
                "Unsupported export format '{}'. Expected csv or json",
                other
            ))),
        }
    }
}

/// Encode rows as CSV with a header line of column keys
pub fn write_csv_to<W: Write>(writer: W, rows: &[TableRow], label: &str) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer
            .serialize(row)
            .map_err(|e| Error::csv(label, "Failed to encode row", e))?;
    }
    csv_writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", label), e))?;
    Ok(())
}

/// Encode rows as a pretty-printed JSON array
pub fn write_json_to<W: Write>(writer: W, rows: &[TableRow]) -> Result<()> {
    serde_json::to_writer_pretty(writer, rows)
        .map_err(|e| Error::json("Failed to encode table rows", e))
}

pub fn write_csv(path: &Path, rows: &[TableRow]) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    write_csv_to(file, rows, &path.display().to_string())
}

pub fn write_json(path: &Path, rows: &[TableRow]) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    let mut writer = std::io::BufWriter::new(file);
    write_json_to(&mut writer, rows)?;
    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))
}

/// Write `rows` to `path` in `format`
pub fn write_export(path: &Path, rows: &[TableRow], format: ExportFormat) -> Result<()> {
    if rows.is_empty() {
        return Err(Error::export("No rows to export"));
    }

    match format {
        ExportFormat::Csv => write_csv(path, rows)?,
        ExportFormat::Json => write_json(path, rows)?,
    }

    info!(
        "Exported {} rows as {} to {}",
        rows.len(),
        format,
        path.display()
    );
    Ok(())
}

/// Render rows as a markdown table for the terminal
pub fn render_markdown(rows: &[TableRow]) -> String {
    if rows.is_empty() {
        return "(no rows)".to_string();
    }
    Table::new(rows).with(Style::markdown()).to_string()
}
