//! Tabular projection of the displayed estates
//!
//! Everything the table, its export, and its terminal rendering share:
//! - [`rows`] - The flat [`TableRow`] projection of an estate
//! - [`sorting`] - Column keys and the mixed numeric/text comparator
//! - [`paging`] - Page arithmetic over sorted rows
//! - [`state`] - Sort and page state driven by user actions
//! - [`format`] - Thousands separators and percent strings
//! - [`export`] - CSV, JSON, and markdown encoders over `TableRow`
//!
//! Export always consumes the full sorted projection, never a single page.

pub mod export;
pub mod format;
pub mod paging;
pub mod rows;
pub mod sorting;
pub mod state;

#[cfg(test)]
mod tests;

pub use export::{ExportFormat, render_markdown, write_csv, write_export, write_json};
pub use format::{format_count, format_percent, format_quantity};
pub use paging::Pagination;
pub use rows::{TableRow, project_rows};
pub use sorting::{SortConfig, SortDirection, SortKey, SortValue, sort_rows};
pub use state::TableState;
