//! Tests for the table projection

use crate::app::services::aggregation::tests::{kebun, sample_kebuns};
use crate::app::services::table_view::{TableRow, project_rows};

#[test]
fn test_projection_fields() {
    let mut estate = kebun("1KSD", "DISTRIK A", (100.0, 200.0), (40.0, 250.0));
    estate.singkatan_distrik = "DA".to_string();
    let row = TableRow::from_kebun(&estate);

    assert_eq!(row.distrik, "DISTRIK A");
    assert_eq!(row.singkatan_distrik, "DA");
    assert_eq!(row.singkatan_kebun, "1KSD");
    assert_eq!(row.nama_kebun, "KEBUN 1KSD");
    assert_eq!(row.total_afdeling, 3.0);
    assert_eq!(row.stok_npk, 1.0);
    assert_eq!(row.stok_dolomit, 2.0);
    assert_eq!(row.sisa_pemupukan_npk, 60.0);
    assert_eq!(row.sisa_pemupukan_dolomit, -50.0);
    assert_eq!(row.real_vs_rencana_npk, "40.00%");
    assert_eq!(row.real_vs_rencana_dolomit, "125.00%");
}

#[test]
fn test_zero_plan_reads_zero_percent() {
    let row = TableRow::from_kebun(&kebun("A", "D", (0.0, 0.0), (5.0, 0.0)));
    assert_eq!(row.real_vs_rencana_npk, "0.00%");
    assert_eq!(row.real_vs_rencana_dolomit, "0.00%");
}

#[test]
fn test_missing_inventory_projects_zero() {
    let mut estate = kebun("A", "D", (1.0, 1.0), (1.0, 1.0));
    estate.inventaris = None;
    assert_eq!(TableRow::from_kebun(&estate).total_afdeling, 0.0);
}

#[test]
fn test_serialized_keys_match_column_keys() {
    let row = TableRow::from_kebun(&kebun("A", "D", (1.0, 2.0), (0.5, 1.0)));
    let json = serde_json::to_value(&row).unwrap();

    for key in [
        "distrik",
        "singkatan_distrik",
        "singkatan_kebun",
        "nama_kebun",
        "total_afdeling",
        "rencanaNPK",
        "rencanaDolomit",
        "stokNPK",
        "stokDolomit",
        "sisaPemupukanNPK",
        "sisaPemupukanDolomit",
        "realisasiNPK",
        "realisasiDolomit",
        "realVsRencanaNPK",
        "realVsRencanaDolomit",
    ] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(json["realVsRencanaNPK"], "50.00%");
}

#[test]
fn test_project_rows_keeps_order() {
    let rows = project_rows(&sample_kebuns());
    let codes: Vec<&str> = rows.iter().map(|r| r.singkatan_kebun.as_str()).collect();
    assert_eq!(codes, vec!["A1", "B1", "A2", "X1", "B2"]);
}
