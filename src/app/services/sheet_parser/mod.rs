//! Sheet export parser for kebun monitoring data
//!
//! This module turns the raw text of a spreadsheet CSV export into typed
//! [`Kebun`](crate::app::models::Kebun) records. Every recoverable problem
//! (ragged rows, blank cells, stray quotes, unparseable numbers) is absorbed
//! here; nothing in this module returns an error.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Line splitting, quote handling, and orchestration
//! - [`column_mapping`] - Named positional layouts for the known sheet variants
//! - [`row_mapper`] - Grid rows to estate records, id assignment
//! - [`field_parsers`] - Cell access and numeric coercion helpers
//! - [`stats`] - Mapping statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use kebun_monitor::app::services::sheet_parser::{SheetParser, SHEET_EXPORT_LAYOUT};
//!
//! let text = "DISTRIK,,SINGKATAN,KODE,NAMA\nDISTRIK 1,,D1,K1,KEBUN SATU,3,100,50";
//! let result = SheetParser::new(SHEET_EXPORT_LAYOUT).parse_text(text);
//!
//! assert_eq!(result.kebuns.len(), 1);
//! assert_eq!(result.kebuns[0].id, "K1-KEBUN SATU");
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod row_mapper;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{
    ColumnLayout, IdStrategy, LEGACY_PLANNING_LAYOUT, LayoutKind, QuantityColumns,
    SHEET_EXPORT_LAYOUT,
};
pub use field_parsers::to_number;
pub use parser::{Grid, SheetParser, parse_line, parse_rows};
pub use row_mapper::map_rows;
pub use stats::{MapResult, MapStats};
