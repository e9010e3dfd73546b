//! Test utilities and fixtures for sheet parser testing
//!
//! This module provides row builders for both sheet layouts and sample export
//! text used across the parser test modules.

// Test modules
mod field_parser_tests;
mod stats_tests;

/// Convert string slices into an owned row
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Build a row in the current sheet layout
///
/// Quantities are given as `[plan_npk, plan_dolomit, stock_npk, stock_dolomit,
/// realized_npk, realized_dolomit]`.
pub fn sheet_export_row(distrik: &str, kode: &str, nama: &str, quantities: [&str; 6]) -> Vec<String> {
    let mut cells = vec![String::new(); 14];
    cells[0] = distrik.to_string();
    cells[2] = format!("S-{}", distrik);
    cells[3] = kode.to_string();
    cells[4] = nama.to_string();
    cells[5] = "4".to_string();
    cells[6] = quantities[0].to_string();
    cells[7] = quantities[1].to_string();
    cells[8] = quantities[2].to_string();
    cells[9] = quantities[3].to_string();
    cells[12] = quantities[4].to_string();
    cells[13] = quantities[5].to_string();
    cells
}

/// Build a row in the legacy planning layout
///
/// Quantities use the same order as [`sheet_export_row`].
pub fn legacy_row(kode: &str, nama: &str, distrik: &str, quantities: [&str; 6]) -> Vec<String> {
    let mut cells = vec![String::new(); 19];
    cells[0] = kode.to_string();
    cells[1] = nama.to_string();
    cells[2] = quantities[0].to_string();
    cells[3] = quantities[1].to_string();
    cells[4] = distrik.to_string();
    cells[11] = quantities[2].to_string();
    cells[12] = quantities[3].to_string();
    cells[17] = quantities[4].to_string();
    cells[18] = quantities[5].to_string();
    cells
}

/// Seven title/header rows as they appear above legacy planning data
pub fn legacy_header_rows() -> Vec<Vec<String>> {
    vec![
        row(&["MONITORING PEMUPUKAN"]),
        row(&["SEMESTER I"]),
        row(&[""]),
        row(&["KODE", "KEBUN", "RENCANA", "", "DISTRIK"]),
        row(&["", "", "NPK", "DOLOMIT"]),
        row(&["", "", "(kg)", "(kg)"]),
        row(&["1", "2", "3", "4", "5"]),
    ]
}

/// Sample export text in the current sheet layout
pub fn create_test_sheet_export() -> String {
    [
        "DISTRIK,NO,SINGKATAN DISTRIK,SINGKATAN KEBUN,NAMA KEBUN,TOTAL AFDELLING,RENCANA NPK,RENCANA DOLOMIT,STOK NPK,STOK DOLOMIT,,,REALISASI NPK,REALISASI DOLOMIT",
        "DISTRIK LABUHAN BATU,1,DLB,1KSD,KEBUN SEI DAUN,6,\"1,000\",500,200,100,,,400,250",
        "",
        "DISTRIK LABUHAN BATU,2,DLB,1KMA,KEBUN MERBAU,4,800,400,50,25,,,800,0",
        "DISTRIK ASAHAN,3,DAS,2KPR,KEBUN PULAU RAJA,5,0,300,,,,,10,\"3,000.5\"",
        ",4,,,,,,,,,,,,",
    ]
    .join("\r\n")
}
