//! Chart totals across a set of estates

use serde::{Deserialize, Serialize};

use crate::app::models::{ChartTotal, DistrictGroup, Kebun};
use crate::constants::chart_labels;

use super::grouping::flatten_groups;

/// Summed plan and realization figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FertilizerTotals {
    pub plan_npk: f64,
    pub realized_npk: f64,
    pub plan_dolomit: f64,
    pub realized_dolomit: f64,
}

impl FertilizerTotals {
    /// Sum the plan and realization figures of every estate
    pub fn sum<'a>(kebuns: impl IntoIterator<Item = &'a Kebun>) -> Self {
        kebuns.into_iter().fold(Self::default(), |mut acc, kebun| {
            acc.plan_npk += kebun.pemupukan.npk;
            acc.realized_npk += kebun.realisasi.npk;
            acc.plan_dolomit += kebun.pemupukan.dolomit;
            acc.realized_dolomit += kebun.realisasi.dolomit;
            acc
        })
    }

    /// Chart bars in display order: plan and realized NPK, then Dolomit
    pub fn to_chart(&self) -> Vec<ChartTotal> {
        [
            (chart_labels::PLAN_NPK, self.plan_npk),
            (chart_labels::REALIZED_NPK, self.realized_npk),
            (chart_labels::PLAN_DOLOMIT, self.plan_dolomit),
            (chart_labels::REALIZED_DOLOMIT, self.realized_dolomit),
        ]
        .into_iter()
        .map(|(label, value)| ChartTotal {
            label: label.to_string(),
            value,
        })
        .collect()
    }
}

/// Exactly four chart totals over a flat list of estates
pub fn compute_totals<'a>(kebuns: impl IntoIterator<Item = &'a Kebun>) -> Vec<ChartTotal> {
    FertilizerTotals::sum(kebuns).to_chart()
}

/// Exactly four chart totals over district groups
pub fn compute_group_totals(groups: &[DistrictGroup]) -> Vec<ChartTotal> {
    compute_totals(flatten_groups(groups))
}
