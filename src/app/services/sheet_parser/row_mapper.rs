//! Grid row mapping for monitoring sheets
//!
//! This module converts positional rows into [`Kebun`] records using a
//! [`ColumnLayout`], and assigns every estate an id that is unique within the
//! load.

use std::collections::HashSet;
use tracing::debug;

use super::column_mapping::{ColumnLayout, IdStrategy};
use super::field_parsers::{
    get_optional_cell, parse_coords, parse_number, parse_optional_number, parse_text,
};
use super::stats::{MapResult, MapStats};
use crate::app::models::{FertilizerPair, Kebun, Pemupukan};
use crate::constants::ROW_ID_PREFIX;

/// Map grid rows into estates
///
/// Rows before `layout.start_row` are skipped, as is any row whose name cell
/// is blank. Ids come from the layout's natural key when the code cell is
/// filled and not already taken, and from `row-<index>` otherwise.
pub fn map_rows(rows: &[Vec<String>], layout: &ColumnLayout) -> MapResult {
    let mut stats = MapStats {
        total_rows: rows.len(),
        header_rows_skipped: layout.start_row.min(rows.len()),
        ..MapStats::default()
    };
    let mut issued = IdRegistry::default();
    let mut kebuns = Vec::new();

    for (index, row) in rows.iter().enumerate().skip(layout.start_row) {
        let Some(nama_kebun) = get_optional_cell(row, Some(layout.nama_kebun)) else {
            stats.blank_rows_skipped += 1;
            debug!("Skipped row {}: no estate name", index);
            continue;
        };

        let kode = parse_text(row, layout.kode);
        let natural_key = natural_key(layout.id_strategy, &kode, nama_kebun);
        let (id, reassigned) = issued.issue(natural_key, index);
        if reassigned {
            stats.ids_reassigned += 1;
            debug!(
                "Row {}: key for '{}' already issued, using {}",
                index, nama_kebun, id
            );
        }

        kebuns.push(map_row(row, layout, id, kode, nama_kebun.to_string()));
    }

    stats.entities_mapped = kebuns.len();
    MapResult { kebuns, stats }
}

fn map_row(
    row: &[String],
    layout: &ColumnLayout,
    id: String,
    kode: String,
    nama_kebun: String,
) -> Kebun {
    Kebun {
        id,
        distrik: parse_text(row, layout.distrik),
        singkatan_distrik: parse_text(row, layout.singkatan_distrik),
        unit: kode.clone(),
        kode,
        nama_kebun,
        luas_ha: parse_optional_number(row, layout.luas_ha),
        inventaris: parse_optional_number(row, layout.inventaris),
        rumah: parse_optional_number(row, layout.rumah),
        coords: parse_coords(row, layout.latitude, layout.longitude),
        pemupukan: Pemupukan {
            npk: parse_number(row, layout.plan.npk),
            dolomit: parse_number(row, layout.plan.dolomit),
        },
        stok_pupuk: FertilizerPair {
            npk: parse_number(row, layout.stock.npk),
            dolomit: parse_number(row, layout.stock.dolomit),
        },
        realisasi: FertilizerPair {
            npk: parse_number(row, layout.realized.npk),
            dolomit: parse_number(row, layout.realized.dolomit),
        },
    }
}

fn natural_key(strategy: IdStrategy, kode: &str, nama_kebun: &str) -> Option<String> {
    if kode.is_empty() {
        return None;
    }
    Some(match strategy {
        IdStrategy::Code => kode.to_string(),
        IdStrategy::CodeAndName => format!("{}-{}", kode, nama_kebun),
    })
}

/// Ids handed out during one load
#[derive(Debug, Default)]
struct IdRegistry {
    issued: HashSet<String>,
}

impl IdRegistry {
    /// Issue an id for the row at `index`, preferring `natural_key`
    ///
    /// Returns the id and whether a non-blank natural key had to be replaced.
    fn issue(&mut self, natural_key: Option<String>, index: usize) -> (String, bool) {
        let had_key = natural_key.is_some();
        if let Some(key) = natural_key.filter(|k| !self.issued.contains(k)) {
            self.issued.insert(key.clone());
            return (key, false);
        }

        let positional = format!("{}{}", ROW_ID_PREFIX, index);
        let mut candidate = positional.clone();
        let mut suffix = 1;
        while self.issued.contains(&candidate) {
            candidate = format!("{}-{}", positional, suffix);
            suffix += 1;
        }
        self.issued.insert(candidate.clone());
        (candidate, had_key)
    }
}
