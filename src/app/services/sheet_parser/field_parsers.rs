//! Field parsing utilities for sheet rows
//!
//! This module provides helper functions for reading cells out of positional
//! rows. Sheet rows are ragged and sparsely filled, so every accessor treats a
//! missing column the same as an empty cell and falls back to the field's zero
//! value instead of failing.

use regex::Regex;
use std::sync::LazyLock;

use crate::app::models::Coords;

/// Leading numeric literal, optionally signed, with optional fraction and exponent
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("numeric prefix pattern")
});

/// Coerce a raw cell into a finite number
///
/// - Absent or empty input yields `0`.
/// - All whitespace is removed and commas are dropped as thousands separators.
/// - The longest leading numeric literal is parsed, so `"45kg"` yields `45`.
/// - Anything unparseable or non-finite yields `0`.
pub fn to_number(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return 0.0;
    }

    NUMERIC_PREFIX
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(number_or_zero)
        .unwrap_or(0.0)
}

/// Pass a numeric value through, replacing NaN and infinities with `0`
pub fn number_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Get a trimmed cell, or `None` when the column is absent or blank
pub fn get_optional_cell(row: &[String], index: Option<usize>) -> Option<&str> {
    index
        .and_then(|i| row.get(i))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Get a trimmed cell as an owned string, empty when absent
pub fn parse_text(row: &[String], index: Option<usize>) -> String {
    get_optional_cell(row, index).unwrap_or_default().to_string()
}

/// Get a cell as a number, zero when absent or unparseable
pub fn parse_number(row: &[String], index: usize) -> f64 {
    to_number(row.get(index).map(String::as_str))
}

/// Get a cell as a number when the layout has that column at all
///
/// Returns `None` only when the layout does not define the column; a defined
/// column with a blank cell reads as `Some(0.0)`.
pub fn parse_optional_number(row: &[String], index: Option<usize>) -> Option<f64> {
    index.map(|i| parse_number(row, i))
}

/// Read a coordinate pair, treating blanks and `(0, 0)` as no location
pub fn parse_coords(
    row: &[String],
    latitude: Option<usize>,
    longitude: Option<usize>,
) -> Option<Coords> {
    let lat = get_optional_cell(row, latitude)?;
    let lon = get_optional_cell(row, longitude)?;

    Some(Coords::new(to_number(Some(lat)), to_number(Some(lon)))).filter(Coords::is_located)
}
