//! Monitoring orchestration
//!
//! Ties the pipeline together for a presentation sink:
//! - [`view`] - The capability a sink implements and the snapshots it receives
//! - [`presenter`] - Selection state machine over one loaded dataset
//! - [`loader`] - Best-effort dataset loading with fallback
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kebun_monitor::app::services::monitoring::{
//!     DatasetLoader, MonitoringPresenter, MonitoringView, ViewSnapshot,
//! };
//! use kebun_monitor::app::services::sheet_parser::SHEET_EXPORT_LAYOUT;
//! use kebun_monitor::app::services::sheet_source::{HttpSheetSource, SheetRef};
//! use kebun_monitor::{Coords, Kebun};
//!
//! struct PrintView;
//!
//! impl MonitoringView for PrintView {
//!     fn set_all_data(&mut self, kebuns: &[Kebun]) {
//!         println!("{} estates loaded", kebuns.len());
//!     }
//!     fn set_filtered_data(&mut self, snapshot: &ViewSnapshot) {
//!         println!("{} district groups shown", snapshot.groups.len());
//!     }
//!     fn focus_map_on(&mut self, coords: Coords, label: Option<&str>) {
//!         println!("focus {:?} {:?}", coords, label);
//!     }
//! }
//!
//! # async fn example() {
//! let source = HttpSheetSource::new();
//! let loader = DatasetLoader::new(source, SheetRef::default(), SHEET_EXPORT_LAYOUT);
//! let mut presenter = MonitoringPresenter::new(PrintView);
//! presenter.load_from(&loader).await;
//! presenter.select("1KSD");
//! presenter.clear();
//! # }
//! ```

pub mod loader;
pub mod presenter;
pub mod view;

#[cfg(test)]
mod tests;

pub use loader::{
    DatasetLoader, FallbackReason, LoadOutcome, LoadReport, LoadedDataset, fallback_kebuns,
};
pub use presenter::{MonitoringPresenter, SelectionState};
pub use view::{MonitoringView, ViewSnapshot};
