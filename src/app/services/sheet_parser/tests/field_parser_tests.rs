//! Tests for numeric coercion and cell accessors

use super::*;
use crate::app::models::Coords;
use crate::app::services::sheet_parser::field_parsers::{
    get_optional_cell, number_or_zero, parse_coords, parse_number, parse_optional_number,
    parse_text, to_number,
};

#[test]
fn test_to_number_examples() {
    assert_eq!(to_number(Some("1,234.5")), 1234.5);
    assert_eq!(to_number(Some("")), 0.0);
    assert_eq!(to_number(Some("abc")), 0.0);
    assert_eq!(to_number(None), 0.0);
}

#[test]
fn test_to_number_strips_whitespace_and_separators() {
    assert_eq!(to_number(Some(" 1 000 ")), 1000.0);
    assert_eq!(to_number(Some("4,405,748")), 4_405_748.0);
    assert_eq!(to_number(Some("\t-12.5\n")), -12.5);
}

#[test]
fn test_to_number_reads_leading_numeric_prefix() {
    assert_eq!(to_number(Some("45kg")), 45.0);
    assert_eq!(to_number(Some("12.5%")), 12.5);
    assert_eq!(to_number(Some("1.2.3")), 1.2);
    assert_eq!(to_number(Some(".5")), 0.5);
    assert_eq!(to_number(Some("1e3")), 1000.0);
    assert_eq!(to_number(Some("-")), 0.0);
}

#[test]
fn test_to_number_never_returns_non_finite() {
    let samples = [
        "NaN", "Infinity", "-Infinity", "inf", "1e400", "-1e400", "\"", ",,,", "  ", "💧", "0x10",
        "--5", "+7",
    ];
    for sample in samples {
        let value = to_number(Some(sample));
        assert!(value.is_finite(), "{:?} produced {}", sample, value);
    }
    assert_eq!(to_number(Some("1e400")), 0.0);
    assert_eq!(to_number(Some("+7")), 7.0);
}

#[test]
fn test_number_or_zero() {
    assert_eq!(number_or_zero(42.0), 42.0);
    assert_eq!(number_or_zero(f64::NAN), 0.0);
    assert_eq!(number_or_zero(f64::INFINITY), 0.0);
}

#[test]
fn test_cell_accessors_tolerate_short_rows() {
    let cells = row(&["  A  ", "", "12"]);

    assert_eq!(get_optional_cell(&cells, Some(0)), Some("A"));
    assert_eq!(get_optional_cell(&cells, Some(1)), None);
    assert_eq!(get_optional_cell(&cells, Some(9)), None);
    assert_eq!(get_optional_cell(&cells, None), None);

    assert_eq!(parse_text(&cells, Some(0)), "A");
    assert_eq!(parse_text(&cells, Some(9)), "");

    assert_eq!(parse_number(&cells, 2), 12.0);
    assert_eq!(parse_number(&cells, 9), 0.0);

    assert_eq!(parse_optional_number(&cells, Some(2)), Some(12.0));
    assert_eq!(parse_optional_number(&cells, Some(9)), Some(0.0));
    assert_eq!(parse_optional_number(&cells, None), None);
}

#[test]
fn test_parse_coords() {
    let cells = row(&["1.67177745", "100.2937518", "0", "0", "x"]);

    assert_eq!(
        parse_coords(&cells, Some(0), Some(1)),
        Some(Coords::new(1.67177745, 100.2937518))
    );
    assert_eq!(parse_coords(&cells, Some(2), Some(3)), None);
    assert_eq!(parse_coords(&cells, Some(0), Some(7)), None);
    assert_eq!(parse_coords(&cells, None, None), None);
}
