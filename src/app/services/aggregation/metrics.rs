//! Per-estate progress metrics

use crate::app::models::{Kebun, KebunMetrics};

/// Planned quantity not yet realized; negative when realization overshoots
pub fn remaining(plan: f64, realized: f64) -> f64 {
    plan - realized
}

/// Realized quantity as a percentage of plan, `0` when nothing was planned
pub fn percent_realized(plan: f64, realized: f64) -> f64 {
    if plan == 0.0 {
        0.0
    } else {
        realized / plan * 100.0
    }
}

impl KebunMetrics {
    pub fn for_kebun(kebun: &Kebun) -> Self {
        let plan = kebun.pemupukan;
        let realized = kebun.realisasi;

        Self {
            id: kebun.id.clone(),
            nama_kebun: kebun.nama_kebun.clone(),
            sisa_pemupukan_npk: remaining(plan.npk, realized.npk),
            sisa_pemupukan_dolomit: remaining(plan.dolomit, realized.dolomit),
            persen_realisasi_npk: percent_realized(plan.npk, realized.npk),
            persen_realisasi_dolomit: percent_realized(plan.dolomit, realized.dolomit),
        }
    }
}

/// One metrics record per estate, in input order
pub fn compute_metrics<'a>(kebuns: impl IntoIterator<Item = &'a Kebun>) -> Vec<KebunMetrics> {
    kebuns.into_iter().map(KebunMetrics::for_kebun).collect()
}
