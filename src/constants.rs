//! Application constants for the kebun monitor
//!
//! This module contains sheet identifiers, default values, and labels used
//! throughout the application. Column layouts live next to the mapper in
//! [`crate::app::services::sheet_parser::column_mapping`].

// =============================================================================
// Sheet Source
// =============================================================================

/// Spreadsheet document holding the monitoring sheet
pub const DEFAULT_DOC_ID: &str = "1kn_dZuFadC7u4h0eEBVIMyrBEc9qvK316v1smObZlYw";

/// Tab (gid) of the monitoring sheet inside the document
pub const DEFAULT_GID: &str = "0";

/// CSV export endpoint, `{doc_id}` and `{gid}` are substituted
pub const SHEET_EXPORT_URL_TEMPLATE: &str =
    "https://docs.google.com/spreadsheets/d/{doc_id}/export?format=csv&gid={gid}";

/// Environment overrides for the sheet source and layout
pub const ENV_DOC_ID: &str = "KEBUN_DOC_ID";
pub const ENV_GID: &str = "KEBUN_GID";
pub const ENV_LAYOUT: &str = "KEBUN_LAYOUT";

// =============================================================================
// Loading Rules
// =============================================================================

/// A fetched grid needs at least this many rows to carry any data
pub const MIN_USABLE_ROWS: usize = 3;

/// District used for estates whose district cell is blank
pub const UNKNOWN_DISTRICT: &str = "UNKNOWN";

/// Prefix of positional ids issued when no natural key is available
pub const ROW_ID_PREFIX: &str = "row-";

// =============================================================================
// Chart Labels
// =============================================================================

/// Labels of the four chart totals, in display order
pub mod chart_labels {
    pub const PLAN_NPK: &str = "Rencana NPK";
    pub const REALIZED_NPK: &str = "Realisasi NPK";
    pub const PLAN_DOLOMIT: &str = "Rencana Dolomit";
    pub const REALIZED_DOLOMIT: &str = "Realisasi Dolomit";
}

// =============================================================================
// Table & Map Presentation
// =============================================================================

/// Default number of table rows per page
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Zoom level used when the map centers on a single estate
pub const MAP_FOCUS_ZOOM: u8 = 13;

/// Fractional padding applied to marker bounds when several estates are shown
pub const MAP_BOUNDS_PADDING: f64 = 0.2;

/// Default export file stem
pub const DEFAULT_EXPORT_STEM: &str = "data_kebun";

/// Map center shown before any estate is plotted
pub const DEFAULT_MAP_CENTER: (f64, f64) = (-6.9, 106.65);

/// Zoom level of the default map view
pub const DEFAULT_MAP_ZOOM: u8 = 10;
