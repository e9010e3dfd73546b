//! Presentation sink capability and view snapshots

use crate::app::models::{ChartTotal, Coords, DistrictGroup, Kebun, KebunMetrics};
use crate::app::services::aggregation::{compute_group_totals, compute_metrics, flatten_groups};

/// What a presentation sink is told
///
/// Notifications are fire-and-forget. Sinks receive borrowed snapshots and
/// clone whatever they want to keep; they never see mutable state.
pub trait MonitoringView {
    /// The full dataset was (re)loaded
    fn set_all_data(&mut self, kebuns: &[Kebun]);

    /// The displayed subset changed; groups and chart totals arrive together
    fn set_filtered_data(&mut self, snapshot: &ViewSnapshot);

    /// Center the map on an estate
    fn focus_map_on(&mut self, coords: Coords, label: Option<&str>);
}

/// Displayed district groups together with the totals derived from them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewSnapshot {
    pub groups: Vec<DistrictGroup>,
    pub totals: Vec<ChartTotal>,
}

impl ViewSnapshot {
    /// Build a snapshot, deriving totals from exactly these groups
    pub fn from_groups(groups: Vec<DistrictGroup>) -> Self {
        let totals = compute_group_totals(&groups);
        Self { groups, totals }
    }

    /// Displayed estates, in group order
    pub fn kebuns(&self) -> impl Iterator<Item = &Kebun> {
        flatten_groups(&self.groups)
    }

    pub fn kebun_count(&self) -> usize {
        self.groups.iter().map(|g| g.kebuns.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.kebun_count() == 0
    }

    /// Per-estate metrics for the displayed estates
    pub fn metrics(&self) -> Vec<KebunMetrics> {
        compute_metrics(self.kebuns())
    }
}
