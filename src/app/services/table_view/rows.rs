//! Flat table projection of an estate

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use super::format::{format_percent, format_quantity};
use crate::app::models::{Kebun, KebunMetrics};

/// One table line, as shown on screen and written to exports
///
/// Serialized keys are the column keys the table sorts by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct TableRow {
    #[tabled(rename = "Distrik")]
    pub distrik: String,

    #[tabled(rename = "Singkatan Distrik")]
    pub singkatan_distrik: String,

    #[tabled(rename = "Singkatan Kebun")]
    pub singkatan_kebun: String,

    #[tabled(rename = "Nama Kebun")]
    pub nama_kebun: String,

    #[tabled(rename = "Total Afdeling")]
    pub total_afdeling: f64,

    #[serde(rename = "rencanaNPK")]
    #[tabled(rename = "Rencana NPK", display_with = "display_quantity")]
    pub rencana_npk: f64,

    #[serde(rename = "rencanaDolomit")]
    #[tabled(rename = "Rencana Dolomit", display_with = "display_quantity")]
    pub rencana_dolomit: f64,

    #[serde(rename = "stokNPK")]
    #[tabled(rename = "Stok NPK", display_with = "display_quantity")]
    pub stok_npk: f64,

    #[serde(rename = "stokDolomit")]
    #[tabled(rename = "Stok Dolomit", display_with = "display_quantity")]
    pub stok_dolomit: f64,

    #[serde(rename = "sisaPemupukanNPK")]
    #[tabled(rename = "Sisa NPK", display_with = "display_quantity")]
    pub sisa_pemupukan_npk: f64,

    #[serde(rename = "sisaPemupukanDolomit")]
    #[tabled(rename = "Sisa Dolomit", display_with = "display_quantity")]
    pub sisa_pemupukan_dolomit: f64,

    #[serde(rename = "realisasiNPK")]
    #[tabled(rename = "Realisasi NPK", display_with = "display_quantity")]
    pub realisasi_npk: f64,

    #[serde(rename = "realisasiDolomit")]
    #[tabled(rename = "Realisasi Dolomit", display_with = "display_quantity")]
    pub realisasi_dolomit: f64,

    #[serde(rename = "realVsRencanaNPK")]
    #[tabled(rename = "Real vs Rencana NPK")]
    pub real_vs_rencana_npk: String,

    #[serde(rename = "realVsRencanaDolomit")]
    #[tabled(rename = "Real vs Rencana Dolomit")]
    pub real_vs_rencana_dolomit: String,
}

fn display_quantity(value: &f64) -> String {
    format_quantity(*value)
}

impl TableRow {
    /// Project an estate; remaining quantities come from the shared metrics
    pub fn from_kebun(kebun: &Kebun) -> Self {
        let metrics = KebunMetrics::for_kebun(kebun);
        let plan = kebun.pemupukan;
        let realized = kebun.realisasi;

        Self {
            distrik: kebun.distrik.clone(),
            singkatan_distrik: kebun.singkatan_distrik.clone(),
            singkatan_kebun: kebun.kode.clone(),
            nama_kebun: kebun.nama_kebun.clone(),
            total_afdeling: kebun.inventaris.unwrap_or(0.0),
            rencana_npk: plan.npk,
            rencana_dolomit: plan.dolomit,
            stok_npk: kebun.stok_pupuk.npk,
            stok_dolomit: kebun.stok_pupuk.dolomit,
            sisa_pemupukan_npk: metrics.sisa_pemupukan_npk,
            sisa_pemupukan_dolomit: metrics.sisa_pemupukan_dolomit,
            realisasi_npk: realized.npk,
            realisasi_dolomit: realized.dolomit,
            real_vs_rencana_npk: format_percent(plan.npk, realized.npk),
            real_vs_rencana_dolomit: format_percent(plan.dolomit, realized.dolomit),
        }
    }
}

/// Project estates in the given order
pub fn project_rows<'a>(kebuns: impl IntoIterator<Item = &'a Kebun>) -> Vec<TableRow> {
    kebuns.into_iter().map(TableRow::from_kebun).collect()
}
