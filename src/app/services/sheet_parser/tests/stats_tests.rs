//! Tests for mapping statistics functionality

use crate::app::services::sheet_parser::MapStats;

#[test]
fn test_map_stats_calculation() {
    let stats = MapStats {
        total_rows: 12,
        header_rows_skipped: 2,
        blank_rows_skipped: 1,
        entities_mapped: 9,
        ids_reassigned: 0,
    };

    assert_eq!(stats.data_rows(), 10);
    assert_eq!(stats.success_rate(), 90.0);
}

#[test]
fn test_map_stats_empty() {
    let stats = MapStats::default();

    assert_eq!(stats.total_rows, 0);
    assert_eq!(stats.data_rows(), 0);
    assert_eq!(stats.success_rate(), 0.0);
}
