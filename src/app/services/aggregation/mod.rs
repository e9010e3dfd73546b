//! Aggregation over loaded estates
//!
//! Pure functions shared by the table, chart, and export paths so that all
//! three always show the same figures:
//! - [`grouping`] - District grouping in first-seen order
//! - [`totals`] - The four chart totals over any set of estates
//! - [`metrics`] - Remaining quantity and percent realized per estate
//!
//! Callers holding district groups flatten them with [`flatten_groups`]
//! before aggregating; the functions here only ever see estates.

pub mod grouping;
pub mod metrics;
pub mod totals;

#[cfg(test)]
pub mod tests;

pub use grouping::{flatten_groups, group_by_district};
pub use metrics::{compute_metrics, percent_realized, remaining};
pub use totals::{FertilizerTotals, compute_group_totals, compute_totals};
