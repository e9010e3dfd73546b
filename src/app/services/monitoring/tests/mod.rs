//! Test utilities for monitoring testing
//!
//! A recording sink and scripted sheet sources.

use tokio_util::sync::CancellationToken;

use crate::app::models::{Coords, Kebun};
use crate::app::services::monitoring::{MonitoringView, ViewSnapshot};
use crate::app::services::sheet_parser::Grid;
use crate::app::services::sheet_source::{SheetRef, SheetSource};
use crate::{Error, Result};


/// Sink that keeps every notification it receives
#[derive(Debug, Default)]
pub struct RecordingView {
    pub all_data: Vec<Vec<Kebun>>,
    pub snapshots: Vec<ViewSnapshot>,
    pub focus_calls: Vec<(Coords, Option<String>)>,
}

impl RecordingView {
    pub fn last_snapshot(&self) -> &ViewSnapshot {
        self.snapshots.last().expect("no snapshot emitted")
    }
}

impl MonitoringView for RecordingView {
    fn set_all_data(&mut self, kebuns: &[Kebun]) {
        self.all_data.push(kebuns.to_vec());
    }

    fn set_filtered_data(&mut self, snapshot: &ViewSnapshot) {
        self.snapshots.push(snapshot.clone());
    }

    fn focus_map_on(&mut self, coords: Coords, label: Option<&str>) {
        self.focus_calls.push((coords, label.map(str::to_string)));
    }
}

/// What a [`StubSource`] answers with
#[derive(Debug, Clone)]
pub enum StubResponse {
    Rows(Grid),
    Status(u16),
}

/// Source answering with a fixed response, optionally cancelling first
#[derive(Debug, Clone)]
pub struct StubSource {
    response: StubResponse,
    cancel_during_fetch: Option<CancellationToken>,
}

impl StubSource {
    pub fn rows(rows: Grid) -> Self {
        Self {
            response: StubResponse::Rows(rows),
            cancel_during_fetch: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            response: StubResponse::Status(status),
            cancel_during_fetch: None,
        }
    }

    /// Cancel `token` while the fetch is in flight
    pub fn cancelling(mut self, token: CancellationToken) -> Self {
        self.cancel_during_fetch = Some(token);
        self
    }
}

impl SheetSource for StubSource {
    async fn fetch_rows(&self, _sheet: &SheetRef) -> Result<Grid> {
        if let Some(token) = &self.cancel_during_fetch {
            token.cancel();
        }
        match &self.response {
            StubResponse::Rows(rows) => Ok(rows.clone()),
            StubResponse::Status(status) => Err(Error::fetch(Some(*status), "stubbed failure")),
        }
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }
}
