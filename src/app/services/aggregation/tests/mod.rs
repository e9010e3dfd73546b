//! Test utilities for aggregation testing
//!
//! The estate builder here is shared with the monitoring and table view tests.

use crate::app::models::{Coords, FertilizerPair, Kebun, Pemupukan};

mod metrics_tests;

/// Build an estate with the given plan and realized `(npk, dolomit)` figures
pub fn kebun(id: &str, distrik: &str, plan: (f64, f64), realized: (f64, f64)) -> Kebun {
    Kebun {
        id: id.to_string(),
        distrik: distrik.to_string(),
        singkatan_distrik: String::new(),
        kode: id.to_string(),
        unit: id.to_string(),
        nama_kebun: format!("KEBUN {}", id),
        luas_ha: None,
        inventaris: Some(3.0),
        rumah: None,
        coords: None,
        pemupukan: Pemupukan {
            npk: plan.0,
            dolomit: plan.1,
        },
        stok_pupuk: FertilizerPair {
            npk: 1.0,
            dolomit: 2.0,
        },
        realisasi: FertilizerPair {
            npk: realized.0,
            dolomit: realized.1,
        },
    }
}

/// Same estate, placed on the map
pub fn located(mut kebun: Kebun, lat: f64, lon: f64) -> Kebun {
    kebun.coords = Some(Coords::new(lat, lon));
    kebun
}

/// A small multi-district dataset in source order
pub fn sample_kebuns() -> Vec<Kebun> {
    vec![
        kebun("A1", "DISTRIK A", (100.0, 200.0), (40.0, 50.0)),
        kebun("B1", "DISTRIK B", (10.0, 20.0), (4.0, 5.0)),
        kebun("A2", "DISTRIK A", (0.0, 80.0), (5.0, 80.0)),
        kebun("X1", "", (1.0, 1.0), (0.0, 0.0)),
        kebun("B2", "DISTRIK B", (30.0, 0.0), (45.0, 0.0)),
    ]
}
