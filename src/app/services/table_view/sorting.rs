//! Column sorting for table rows
//!
//! Values are compared numerically whenever either side reads as a non-zero
//! number, using the same leading-number coercion as the sheet mapper. Only
//! when both read as zero do they fall back to a case-insensitive text
//! comparison. Codes like `1KSD` therefore sort by their leading digit.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::rows::TableRow;
use crate::app::services::sheet_parser::to_number;
use crate::{Error, Result};

/// Sortable table column, named by its export key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "distrik")]
    Distrik,
    #[serde(rename = "singkatan_distrik")]
    SingkatanDistrik,
    #[serde(rename = "singkatan_kebun")]
    SingkatanKebun,
    #[default]
    #[serde(rename = "nama_kebun")]
    NamaKebun,
    #[serde(rename = "total_afdeling")]
    TotalAfdeling,
    #[serde(rename = "rencanaNPK")]
    RencanaNpk,
    #[serde(rename = "rencanaDolomit")]
    RencanaDolomit,
    #[serde(rename = "stokNPK")]
    StokNpk,
    #[serde(rename = "stokDolomit")]
    StokDolomit,
    #[serde(rename = "sisaPemupukanNPK")]
    SisaPemupukanNpk,
    #[serde(rename = "sisaPemupukanDolomit")]
    SisaPemupukanDolomit,
    #[serde(rename = "realisasiNPK")]
    RealisasiNpk,
    #[serde(rename = "realisasiDolomit")]
    RealisasiDolomit,
    #[serde(rename = "realVsRencanaNPK")]
    RealVsRencanaNpk,
    #[serde(rename = "realVsRencanaDolomit")]
    RealVsRencanaDolomit,
}

impl SortKey {
    pub const ALL: [SortKey; 15] = [
        Self::Distrik,
        Self::SingkatanDistrik,
        Self::SingkatanKebun,
        Self::NamaKebun,
        Self::TotalAfdeling,
        Self::RencanaNpk,
        Self::RencanaDolomit,
        Self::StokNpk,
        Self::StokDolomit,
        Self::SisaPemupukanNpk,
        Self::SisaPemupukanDolomit,
        Self::RealisasiNpk,
        Self::RealisasiDolomit,
        Self::RealVsRencanaNpk,
        Self::RealVsRencanaDolomit,
    ];

    /// Column key as used in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distrik => "distrik",
            Self::SingkatanDistrik => "singkatan_distrik",
            Self::SingkatanKebun => "singkatan_kebun",
            Self::NamaKebun => "nama_kebun",
            Self::TotalAfdeling => "total_afdeling",
            Self::RencanaNpk => "rencanaNPK",
            Self::RencanaDolomit => "rencanaDolomit",
            Self::StokNpk => "stokNPK",
            Self::StokDolomit => "stokDolomit",
            Self::SisaPemupukanNpk => "sisaPemupukanNPK",
            Self::SisaPemupukanDolomit => "sisaPemupukanDolomit",
            Self::RealisasiNpk => "realisasiNPK",
            Self::RealisasiDolomit => "realisasiDolomit",
            Self::RealVsRencanaNpk => "realVsRencanaNPK",
            Self::RealVsRencanaDolomit => "realVsRencanaDolomit",
        }
    }

    /// The value of this column in `row`
    pub fn value<'a>(&self, row: &'a TableRow) -> SortValue<'a> {
        match self {
            Self::Distrik => SortValue::Text(&row.distrik),
            Self::SingkatanDistrik => SortValue::Text(&row.singkatan_distrik),
            Self::SingkatanKebun => SortValue::Text(&row.singkatan_kebun),
            Self::NamaKebun => SortValue::Text(&row.nama_kebun),
            Self::TotalAfdeling => SortValue::Number(row.total_afdeling),
            Self::RencanaNpk => SortValue::Number(row.rencana_npk),
            Self::RencanaDolomit => SortValue::Number(row.rencana_dolomit),
            Self::StokNpk => SortValue::Number(row.stok_npk),
            Self::StokDolomit => SortValue::Number(row.stok_dolomit),
            Self::SisaPemupukanNpk => SortValue::Number(row.sisa_pemupukan_npk),
            Self::SisaPemupukanDolomit => SortValue::Number(row.sisa_pemupukan_dolomit),
            Self::RealisasiNpk => SortValue::Number(row.realisasi_npk),
            Self::RealisasiDolomit => SortValue::Number(row.realisasi_dolomit),
            Self::RealVsRencanaNpk => SortValue::Text(&row.real_vs_rencana_npk),
            Self::RealVsRencanaDolomit => SortValue::Text(&row.real_vs_rencana_dolomit),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    /// Accepts export keys case-insensitively, with `-` for `_`
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                Error::configuration(format!(
                    "Unknown sort column '{}'. Expected one of: {}",
                    s,
                    Self::ALL.map(|k| k.as_str()).join(", ")
                ))
            })
    }
}

/// A cell as seen by the comparator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl SortValue<'_> {
    fn as_number(&self) -> f64 {
        match self {
            Self::Text(text) => to_number(Some(text)),
            Self::Number(value) => *value,
        }
    }

    fn as_lowercase(&self) -> String {
        match self {
            Self::Text(text) => text.to_lowercase(),
            Self::Number(value) => value.to_string(),
        }
    }

    /// Numeric when either side is non-zero, otherwise case-insensitive text
    pub fn compare(&self, other: &Self) -> Ordering {
        let (a, b) = (self.as_number(), other.as_number());
        if a != 0.0 || b != 0.0 {
            return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        }
        self.as_lowercase().cmp(&other.as_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Sorting by the active column flips direction; a new column starts ascending
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.reversed();
        } else {
            *self = Self::new(key, SortDirection::Ascending);
        }
    }

    pub fn compare(&self, a: &TableRow, b: &TableRow) -> Ordering {
        let ordering = self.key.value(a).compare(&self.key.value(b));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Stable sort; rows comparing equal keep their relative order
pub fn sort_rows(rows: &mut [TableRow], config: &SortConfig) {
    rows.sort_by(|a, b| config.compare(a, b));
}
