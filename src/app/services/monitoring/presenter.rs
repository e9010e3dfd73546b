//! Selection state machine over one loaded dataset
//!
//! The presenter owns the loaded estates and decides what the sink shows.
//! It is in one of two states: showing every district, or focused on a single
//! estate. Each transition replaces the displayed snapshot wholesale and hands
//! it to the sink with its totals already derived.

use tracing::{debug, info, warn};

use super::loader::{DatasetLoader, LoadReport};
use super::view::{MonitoringView, ViewSnapshot};
use crate::app::models::{DistrictGroup, Kebun, KebunMetrics};
use crate::app::services::aggregation::group_by_district;
use crate::app::services::sheet_source::SheetSource;

/// What the sink is currently showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Every estate, grouped by district
    #[default]
    All,
    /// A single estate, identified by its id
    Focused { id: String },
}

/// Selection/filter state machine bound to a presentation sink
#[derive(Debug)]
pub struct MonitoringPresenter<V: MonitoringView> {
    view: V,
    data: Vec<Kebun>,
    all_groups: Vec<DistrictGroup>,
    state: SelectionState,
    current: ViewSnapshot,
}

impl<V: MonitoringView> MonitoringPresenter<V> {
    /// Create a presenter with no data, in the `All` state
    pub fn new(view: V) -> Self {
        Self {
            view,
            data: Vec::new(),
            all_groups: Vec::new(),
            state: SelectionState::All,
            current: ViewSnapshot::default(),
        }
    }

    /// Replace the dataset and show every district
    ///
    /// Any selection is dropped.
    pub fn load(&mut self, kebuns: Vec<Kebun>) {
        if let SelectionState::Focused { id } = &self.state {
            debug!("Dropping selection of {} on reload", id);
        }

        self.data = kebuns;
        self.all_groups = group_by_district(self.data.iter());
        self.state = SelectionState::All;

        info!(
            "Loaded {} estates in {} districts",
            self.data.len(),
            self.all_groups.len()
        );

        self.view.set_all_data(&self.data);
        self.emit(ViewSnapshot::from_groups(self.all_groups.clone()));
    }

    /// Fetch through `loader` and load the result, fallback included
    ///
    /// Returns `None` when the load was cancelled before the response arrived;
    /// nothing is emitted in that case.
    pub async fn load_from<S: SheetSource>(
        &mut self,
        loader: &DatasetLoader<S>,
    ) -> Option<LoadReport> {
        let dataset = loader.fetch_dataset().await?;
        self.load(dataset.kebuns);
        Some(dataset.report)
    }

    /// Focus on the estate whose id, or failing that code, equals `key`
    ///
    /// Returns whether an estate was found. A miss leaves the state unchanged.
    pub fn select(&mut self, key: &str) -> bool {
        let Some(kebun) = self.data.iter().find(|k| k.matches_key(key)).cloned() else {
            debug!("No estate matches '{}', selection unchanged", key);
            return false;
        };

        self.state = SelectionState::Focused {
            id: kebun.id.clone(),
        };
        self.emit(ViewSnapshot::from_groups(vec![DistrictGroup {
            distrik: kebun.district_key().to_string(),
            kebuns: vec![kebun.clone()],
        }]));

        match kebun.location() {
            Some(coords) => self
                .view
                .focus_map_on(coords, Some(kebun.nama_kebun.as_str())),
            None => warn!("No coordinates for selected estate {}", kebun.id),
        }

        true
    }

    /// Show every district again
    pub fn clear(&mut self) {
        self.state = SelectionState::All;
        self.emit(ViewSnapshot::from_groups(self.all_groups.clone()));
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Id of the focused estate, if any
    pub fn selected_id(&self) -> Option<&str> {
        match &self.state {
            SelectionState::All => None,
            SelectionState::Focused { id } => Some(id),
        }
    }

    /// The full loaded dataset
    pub fn all_data(&self) -> &[Kebun] {
        &self.data
    }

    /// The snapshot most recently handed to the sink
    pub fn current_view(&self) -> &ViewSnapshot {
        &self.current
    }

    /// Metrics for the currently displayed estates
    pub fn current_metrics(&self) -> Vec<KebunMetrics> {
        self.current.metrics()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn emit(&mut self, snapshot: ViewSnapshot) {
        self.current = snapshot;
        self.view.set_filtered_data(&self.current);
    }
}
