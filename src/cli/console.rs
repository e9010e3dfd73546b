//! Terminal presentation sink
//!
//! [`ConsoleView`] receives presenter notifications and renders the table
//! page, chart totals, and map summary as text.

use colored::Colorize;
use std::fmt;

use crate::app::models::{Coords, Kebun};
use crate::app::services::map_view::{MapScene, Viewport};
use crate::app::services::monitoring::{
    LoadOutcome, LoadReport, MonitoringView, ViewSnapshot,
};
use crate::app::services::table_view::{
    Pagination, SortConfig, TableState, format_count, format_quantity, render_markdown,
};

/// Presentation sink that renders to text
#[derive(Debug, Default)]
pub struct ConsoleView {
    all_data: Vec<Kebun>,
    snapshot: ViewSnapshot,
    table: TableState,
    requested_page: usize,
    focus: Option<(Coords, String)>,
}

impl ConsoleView {
    pub fn new(sort: SortConfig, pagination: Pagination, page: usize) -> Self {
        Self {
            table: TableState::new(sort, pagination),
            requested_page: page.max(1),
            ..Self::default()
        }
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn snapshot(&self) -> &ViewSnapshot {
        &self.snapshot
    }

    pub fn focus(&self) -> Option<&(Coords, String)> {
        self.focus.as_ref()
    }

    pub fn map_scene(&self) -> MapScene {
        MapScene::for_view(&self.all_data, &self.snapshot)
    }

    /// Render the current view: heading, table page, chart totals, map
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConsoleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = match self.snapshot.groups.as_slice() {
            [group] if self.focus.is_some() || self.snapshot.kebun_count() == 1 => {
                format!("Monitoring Pemupukan - {}", group.distrik)
            }
            _ => "Monitoring Pemupukan - Semua Distrik".to_string(),
        };
        writeln!(f, "{}", heading.bold().cyan())?;
        writeln!(
            f,
            "{} estates in {} districts",
            format_count(self.snapshot.kebun_count()),
            format_count(self.snapshot.groups.len())
        )?;
        writeln!(f)?;

        let pagination = self.table.pagination();
        writeln!(
            f,
            "{} (page {} of {}, sorted by {} {:?})",
            "Tabel".bold(),
            pagination.current_page(),
            self.table.total_pages(),
            self.table.sort().key,
            self.table.sort().direction
        )?;
        writeln!(f, "{}", render_markdown(self.table.page_rows()))?;
        writeln!(f)?;

        writeln!(f, "{}", "Grafik".bold())?;
        for total in &self.snapshot.totals {
            writeln!(f, "  {:<18} {:>20}", total.label, format_quantity(total.value))?;
        }
        writeln!(f)?;

        writeln!(f, "{}", "Peta".bold())?;
        let scene = self.map_scene();
        for marker in &scene.markers {
            writeln!(
                f,
                "  {} ({:.5}, {:.5}) {}",
                marker.nama_kebun, marker.coords.lat, marker.coords.lon, marker.distrik
            )?;
        }
        let viewport = match &self.focus {
            Some((coords, _)) => Viewport::focus(*coords),
            None => scene.viewport,
        };
        writeln!(f, "  {}", describe_viewport(&viewport))
    }
}

fn describe_viewport(viewport: &Viewport) -> String {
    match viewport {
        Viewport::Unchanged => format!(
            "No located estates; map keeps its default view ({})",
            describe_viewport(&Viewport::initial())
        )
        .dimmed()
        .to_string(),
        Viewport::Center { coords, zoom } => {
            format!("View: center ({:.5}, {:.5}) zoom {}", coords.lat, coords.lon, zoom)
        }
        Viewport::Bounds {
            south_west,
            north_east,
        } => format!(
            "View: bounds ({:.5}, {:.5}) - ({:.5}, {:.5})",
            south_west.lat, south_west.lon, north_east.lat, north_east.lon
        ),
    }
}

/// One-line summary of how the data was loaded
pub fn describe_load(report: &LoadReport) -> String {
    match &report.outcome {
        LoadOutcome::Loaded => {
            let mapped = report
                .stats
                .as_ref()
                .map(|s| format!(" ({:.1}% of data rows)", s.success_rate()))
                .unwrap_or_default();
            format!(
                "{} {} estates from sheet{}",
                "Loaded".green(),
                format_count(report.estates),
                mapped
            )
        }
        LoadOutcome::Fallback(reason) => format!(
            "{} {}; showing built-in data",
            "Fallback:".yellow().bold(),
            reason
        ),
    }
}

impl MonitoringView for ConsoleView {
    fn set_all_data(&mut self, kebuns: &[Kebun]) {
        self.all_data = kebuns.to_vec();
        self.focus = None;
    }

    fn set_filtered_data(&mut self, snapshot: &ViewSnapshot) {
        self.snapshot = snapshot.clone();
        self.focus = None;
        self.table.set_snapshot(snapshot);
        self.table.go_to_page(self.requested_page);
    }

    fn focus_map_on(&mut self, coords: Coords, label: Option<&str>) {
        self.focus = Some((coords, label.unwrap_or_default().to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::monitoring::{MonitoringPresenter, fallback_kebuns};
    use crate::app::services::table_view::{SortDirection, SortKey};

    fn presenter() -> MonitoringPresenter<ConsoleView> {
        let view = ConsoleView::new(
            SortConfig::new(SortKey::RencanaNpk, SortDirection::Descending),
            Pagination::new(10),
            1,
        );
        let mut presenter = MonitoringPresenter::new(view);
        presenter.load(fallback_kebuns());
        presenter
    }

    #[test]
    fn test_render_all_districts() {
        colored::control::set_override(false);
        let presenter = presenter();
        let rendered = presenter.view().render();

        assert!(rendered.contains("Monitoring Pemupukan - DISTRIK JAWA BARAT"));
        assert!(rendered.contains("KEBUN SEI DAUN"));
        assert!(rendered.contains("6,985.83"));
        assert!(rendered.contains("2,898,900.00"));
        assert!(rendered.contains("zoom 13"));
    }

    #[test]
    fn test_focus_is_recorded_and_cleared() {
        let mut presenter = presenter();
        assert!(presenter.select("1KSD"));
        assert_eq!(
            presenter.view().focus().map(|(_, label)| label.as_str()),
            Some("KEBUN SEI DAUN")
        );

        presenter.clear();
        assert!(presenter.view().focus().is_none());
        assert_eq!(presenter.view().table().sorted_rows().len(), 1);
    }

    #[test]
    fn test_render_without_located_estates_shows_default_view() {
        colored::control::set_override(false);
        let mut kebun = fallback_kebuns().remove(0);
        kebun.coords = None;

        let mut presenter = presenter();
        presenter.load(vec![kebun]);
        let rendered = presenter.view().render();

        assert!(rendered.contains("map keeps its default view"));
        assert!(rendered.contains("center (-6.90000, 106.65000) zoom 10"));
    }
}
