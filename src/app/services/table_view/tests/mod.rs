//! Test utilities for table view testing

use crate::app::services::aggregation::tests::kebun;
use crate::app::services::table_view::TableRow;

mod rows_tests;

/// Project a single estate with the given name and code
pub fn named_row(kode: &str, nama: &str, plan_npk: f64) -> TableRow {
    let mut estate = kebun(kode, "DISTRIK A", (plan_npk, 0.0), (0.0, 0.0));
    estate.nama_kebun = nama.to_string();
    TableRow::from_kebun(&estate)
}

pub fn names(rows: &[TableRow]) -> Vec<&str> {
    rows.iter().map(|r| r.nama_kebun.as_str()).collect()
}
