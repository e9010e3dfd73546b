//! Column layouts for the known monitoring sheet variants
//!
//! The monitoring sheet is addressed by position, not by header text: its
//! header rows are merged cells and free-form notes that do not survive CSV
//! export in any stable shape. Each historical variant of the sheet is captured
//! here as a named [`ColumnLayout`] constant so that choosing a variant is a
//! single injected value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Column positions of one NPK/Dolomit quantity pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityColumns {
    pub npk: usize,
    pub dolomit: usize,
}

/// How the natural key of an estate is formed from its row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// The code cell alone
    Code,
    /// `<code>-<name>`, for sheets whose codes repeat across estates
    CodeAndName,
}

/// Positional column layout of a monitoring sheet variant
///
/// Optional columns are `None` when the variant does not carry that field at
/// all; mapped estates then get the field's zero value.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Human-readable layout name used in logs
    pub name: &'static str,

    /// First data row; rows above it are titles and headers
    pub start_row: usize,

    /// Estate name; a blank cell here means the row is not an estate
    pub nama_kebun: usize,

    pub kode: Option<usize>,
    pub distrik: Option<usize>,
    pub singkatan_distrik: Option<usize>,
    pub luas_ha: Option<usize>,
    pub inventaris: Option<usize>,
    pub rumah: Option<usize>,
    pub latitude: Option<usize>,
    pub longitude: Option<usize>,

    pub plan: QuantityColumns,
    pub stock: QuantityColumns,
    pub realized: QuantityColumns,

    pub id_strategy: IdStrategy,
}

/// Current monitoring sheet: one header row, district-first columns
///
/// A=DISTRIK, C=SINGKATAN DISTRIK, D=SINGKATAN KEBUN, E=NAMA KEBUN,
/// F=TOTAL AFDELING, G/H=Rencana, I/J=Stok, M/N=Realisasi.
pub const SHEET_EXPORT_LAYOUT: ColumnLayout = ColumnLayout {
    name: "sheet-export",
    start_row: 1,
    nama_kebun: 4,
    kode: Some(3),
    distrik: Some(0),
    singkatan_distrik: Some(2),
    luas_ha: None,
    inventaris: Some(5),
    rumah: None,
    latitude: None,
    longitude: None,
    plan: QuantityColumns { npk: 6, dolomit: 7 },
    stock: QuantityColumns { npk: 8, dolomit: 9 },
    realized: QuantityColumns {
        npk: 12,
        dolomit: 13,
    },
    id_strategy: IdStrategy::CodeAndName,
};

/// Older planning sheet: seven title rows, code-first columns
///
/// A=kode, B=nama kebun, C/D=Rencana, E=distrik, L/M=Stok, R/S=Realisasi.
pub const LEGACY_PLANNING_LAYOUT: ColumnLayout = ColumnLayout {
    name: "legacy-planning",
    start_row: 7,
    nama_kebun: 1,
    kode: Some(0),
    distrik: Some(4),
    singkatan_distrik: None,
    luas_ha: None,
    inventaris: None,
    rumah: None,
    latitude: None,
    longitude: None,
    plan: QuantityColumns { npk: 2, dolomit: 3 },
    stock: QuantityColumns {
        npk: 11,
        dolomit: 12,
    },
    realized: QuantityColumns {
        npk: 17,
        dolomit: 18,
    },
    id_strategy: IdStrategy::Code,
};

impl ColumnLayout {
    /// Layout constant for a layout kind
    pub fn for_kind(kind: LayoutKind) -> &'static ColumnLayout {
        match kind {
            LayoutKind::SheetExport => &SHEET_EXPORT_LAYOUT,
            LayoutKind::LegacyPlanning => &LEGACY_PLANNING_LAYOUT,
        }
    }

    /// Same layout with a different first data row
    pub fn with_start_row(mut self, start_row: usize) -> Self {
        self.start_row = start_row;
        self
    }

    /// Same layout with coordinate columns
    pub fn with_coordinates(mut self, latitude: usize, longitude: usize) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

/// Selectable sheet variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    #[default]
    SheetExport,
    LegacyPlanning,
}

impl LayoutKind {
    /// Column layout for this variant
    pub fn layout(self) -> ColumnLayout {
        ColumnLayout::for_kind(self).clone()
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ColumnLayout::for_kind(*self).name)
    }
}

impl FromStr for LayoutKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sheet-export" | "sheet" | "export" => Ok(Self::SheetExport),
            "legacy-planning" | "legacy" => Ok(Self::LegacyPlanning),
            other => Err(Error::configuration(format!(
                "Unknown sheet layout '{}' (expected 'sheet-export' or 'legacy-planning')",
                other
            ))),
        }
    }
}
