//! Data models for kebun monitoring
//!
//! This module contains the core data structures for representing plantation
//! estates (kebun), their fertilizer quantities, and the derived district
//! groupings and metrics computed from them.

use serde::{Deserialize, Serialize};

// =============================================================================
// Geospatial
// =============================================================================

/// Latitude/longitude pair in WGS84 decimal degrees
///
/// `(0, 0)` is the sheet's placeholder for "no location" and is never plotted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

impl Coords {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether these coordinates describe a real, plottable place
    pub fn is_located(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && !(self.lat == 0.0 && self.lon == 0.0)
    }

    /// Stable key used to de-duplicate map markers
    pub fn marker_key(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}

// =============================================================================
// Fertilizer Quantities
// =============================================================================

/// Planned fertilizer quantities for the current cycle (semester I)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pemupukan {
    #[serde(rename = "npk_smI")]
    pub npk: f64,
    #[serde(rename = "dolomit_smI")]
    pub dolomit: f64,
}

/// Quantity pair used for stock on hand and realized application
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FertilizerPair {
    pub npk: f64,
    pub dolomit: f64,
}

// =============================================================================
// Estate
// =============================================================================

/// A managed plantation estate with its fertilization plan and progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kebun {
    /// Unique within one loaded dataset
    pub id: String,

    /// District (distrik) the estate belongs to
    pub distrik: String,

    /// District abbreviation
    pub singkatan_distrik: String,

    /// Short estate code
    pub kode: String,

    /// Alias of `kode` kept for consumers of the older sheet layout
    pub unit: String,

    /// Estate name
    pub nama_kebun: String,

    /// Area in hectares, when the sheet provides it
    pub luas_ha: Option<f64>,

    /// Unit count (total afdeling)
    pub inventaris: Option<f64>,

    /// Housing count
    pub rumah: Option<f64>,

    /// Location; `None` when the sheet carries no usable coordinates
    pub coords: Option<Coords>,

    /// Planned quantities
    pub pemupukan: Pemupukan,

    /// Stock on hand
    #[serde(rename = "stokPupuk")]
    pub stok_pupuk: FertilizerPair,

    /// Realized quantities
    pub realisasi: FertilizerPair,
}

impl Kebun {
    /// Plottable coordinates, filtering out the "no location" sentinel
    pub fn location(&self) -> Option<Coords> {
        self.coords.filter(Coords::is_located)
    }

    /// Whether `key` identifies this estate by id or, failing that, by code
    pub fn matches_key(&self, key: &str) -> bool {
        self.id == key || (!self.kode.is_empty() && self.kode == key)
    }

    /// District name used for grouping
    pub fn district_key(&self) -> &str {
        let trimmed = self.distrik.trim();
        if trimmed.is_empty() {
            crate::constants::UNKNOWN_DISTRICT
        } else {
            trimmed
        }
    }
}

// =============================================================================
// Derived Structures
// =============================================================================

/// Estates of one district, in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictGroup {
    pub distrik: String,
    pub kebuns: Vec<Kebun>,
}

/// Per-estate progress figures derived from plan and realization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KebunMetrics {
    pub id: String,
    pub nama_kebun: String,
    /// Plan minus realized; negative means over-realization
    #[serde(rename = "sisaPemupukanNPK")]
    pub sisa_pemupukan_npk: f64,
    #[serde(rename = "sisaPemupukanDolomit")]
    pub sisa_pemupukan_dolomit: f64,
    /// Realized as a percentage of plan; zero when nothing was planned
    #[serde(rename = "persenRealisasiNPK")]
    pub persen_realisasi_npk: f64,
    #[serde(rename = "persenRealisasiDolomit")]
    pub persen_realisasi_dolomit: f64,
}

/// One bar of the fertilization chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTotal {
    pub label: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_sentinel_is_not_located() {
        assert!(!Coords::new(0.0, 0.0).is_located());
        assert!(!Coords::new(f64::NAN, 100.0).is_located());
        assert!(Coords::new(1.67, 100.29).is_located());
        assert!(Coords::new(0.0, 100.29).is_located());
    }

    #[test]
    fn test_matches_key_by_id_or_code() {
        let kebun = Kebun {
            id: "1KSD-KEBUN SEI DAUN".to_string(),
            distrik: String::new(),
            singkatan_distrik: String::new(),
            kode: "1KSD".to_string(),
            unit: "1KSD".to_string(),
            nama_kebun: "KEBUN SEI DAUN".to_string(),
            luas_ha: None,
            inventaris: None,
            rumah: None,
            coords: Some(Coords::new(0.0, 0.0)),
            pemupukan: Pemupukan::default(),
            stok_pupuk: FertilizerPair::default(),
            realisasi: FertilizerPair::default(),
        };

        assert!(kebun.matches_key("1KSD-KEBUN SEI DAUN"));
        assert!(kebun.matches_key("1KSD"));
        assert!(!kebun.matches_key(""));
        assert_eq!(kebun.district_key(), "UNKNOWN");
        assert_eq!(kebun.location(), None);
    }

    #[test]
    fn test_serialized_field_names_follow_sheet_model() {
        let json = serde_json::to_value(Pemupukan {
            npk: 1.0,
            dolomit: 2.0,
        })
        .unwrap();
        assert_eq!(json["npk_smI"], 1.0);
        assert_eq!(json["dolomit_smI"], 2.0);
    }
}
