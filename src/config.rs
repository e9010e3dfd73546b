//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional JSON file, then
//! environment variables, then command-line flags. Each layer only overrides
//! what it sets.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::app::services::sheet_parser::{ColumnLayout, LayoutKind};
use crate::app::services::sheet_source::SheetRef;
use crate::app::services::table_view::{Pagination, SortConfig};
use crate::constants::{
    DEFAULT_DOC_ID, DEFAULT_GID, DEFAULT_ROWS_PER_PAGE, ENV_DOC_ID, ENV_GID, ENV_LAYOUT,
};
use crate::{Error, Result};

/// Main configuration for the kebun monitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spreadsheet document id
    pub doc_id: String,

    /// Sheet tab id within the document
    pub gid: String,

    /// Column layout of the sheet
    pub layout: LayoutKind,

    /// Override of the layout's first data row
    pub start_row: Option<usize>,

    /// Latitude/longitude columns, when the sheet carries coordinates
    pub latitude_column: Option<usize>,
    pub longitude_column: Option<usize>,

    /// Read a downloaded export instead of fetching over HTTP
    pub source_file: Option<PathBuf>,

    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,

    /// Table page size
    pub rows_per_page: usize,

    /// Initial table sort
    pub sort: SortConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            doc_id: DEFAULT_DOC_ID.to_string(),
            gid: DEFAULT_GID.to_string(),
            layout: LayoutKind::default(),
            start_row: None,
            latitude_column: None,
            longitude_column: None,
            source_file: None,
            request_timeout_secs: 30,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            sort: SortConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file; absent keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| Error::json(format!("Invalid config file {}", path.display()), e))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; blank values are ignored
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(doc_id) = value(ENV_DOC_ID) {
            debug!("{} overrides sheet document id", ENV_DOC_ID);
            self.doc_id = doc_id.trim().to_string();
        }
        if let Some(gid) = value(ENV_GID) {
            debug!("{} overrides sheet gid", ENV_GID);
            self.gid = gid.trim().to_string();
        }
        if let Some(layout) = value(ENV_LAYOUT) {
            self.layout = layout.parse()?;
        }
        Ok(self)
    }

    pub fn with_sheet(mut self, doc_id: impl Into<String>, gid: impl Into<String>) -> Self {
        self.doc_id = doc_id.into();
        self.gid = gid.into();
        self
    }

    pub fn with_layout(mut self, layout: LayoutKind) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_source_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_file = Some(path.into());
        self
    }

    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.rows_per_page = rows_per_page;
        self
    }

    pub fn with_sort(mut self, sort: SortConfig) -> Self {
        self.sort = sort;
        self
    }

    /// Reject settings no run could succeed with
    pub fn validate(&self) -> Result<()> {
        if self.source_file.is_none() {
            if self.doc_id.trim().is_empty() {
                return Err(Error::configuration("Sheet document id must not be empty"));
            }
            if self.gid.trim().is_empty() {
                return Err(Error::configuration("Sheet gid must not be empty"));
            }
        }
        if self.rows_per_page == 0 {
            return Err(Error::configuration("Rows per page must be at least 1"));
        }
        if self.latitude_column.is_some() != self.longitude_column.is_some() {
            return Err(Error::configuration(
                "Latitude and longitude columns must be given together",
            ));
        }
        Ok(())
    }

    pub fn sheet_ref(&self) -> SheetRef {
        SheetRef::new(self.doc_id.clone(), self.gid.clone())
    }

    /// The configured layout with start row and coordinate overrides applied
    pub fn column_layout(&self) -> ColumnLayout {
        let mut layout = self.layout.layout();
        if let Some(start_row) = self.start_row {
            layout = layout.with_start_row(start_row);
        }
        if let (Some(lat), Some(lon)) = (self.latitude_column, self.longitude_column) {
            layout = layout.with_coordinates(lat, lon);
        }
        layout
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.rows_per_page)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
