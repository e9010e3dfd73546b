//! Mapping statistics and result structures for sheet processing
//!
//! This module provides types for tracking how many rows became estates and
//! why the rest did not.

use crate::app::models::Kebun;

/// Mapping result with estates and basic statistics
#[derive(Debug, Clone)]
pub struct MapResult {
    /// Estates in source order
    pub kebuns: Vec<Kebun>,

    /// Basic mapping statistics
    pub stats: MapStats,
}

/// Simple mapping statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MapStats {
    /// Number of rows in the grid, header rows included
    pub total_rows: usize,

    /// Rows above the layout's first data row
    pub header_rows_skipped: usize,

    /// Data rows without an estate name
    pub blank_rows_skipped: usize,

    /// Number of estates produced
    pub entities_mapped: usize,

    /// Estates whose natural key was already taken and got a positional id
    pub ids_reassigned: usize,
}

impl MapStats {
    /// Rows at or after the first data row
    pub fn data_rows(&self) -> usize {
        self.total_rows.saturating_sub(self.header_rows_skipped)
    }

    /// Percentage of data rows that became estates
    pub fn success_rate(&self) -> f64 {
        let data_rows = self.data_rows();
        if data_rows == 0 {
            0.0
        } else {
            (self.entities_mapped as f64 / data_rows as f64) * 100.0
        }
    }
}
