//! Best-effort dataset loading with fallback
//!
//! Loading is a single attempt. Every way it can go wrong ends in the same
//! place: the built-in fallback dataset, with the reason logged and recorded
//! in the [`LoadReport`]. There is no retry and no partial result.
//!
//! Fallback chain:
//! 1. Source error (transport failure, non-success status) -> fallback
//! 2. Fewer than [`MIN_USABLE_ROWS`] rows -> fallback
//! 3. Rows present but no estate survives mapping -> fallback
//! 4. Otherwise the mapped estates are used

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::app::models::{Coords, FertilizerPair, Kebun, Pemupukan};
use crate::app::services::sheet_parser::{ColumnLayout, MapStats, SheetParser};
use crate::app::services::sheet_source::{SheetRef, SheetSource};
use crate::constants::MIN_USABLE_ROWS;

/// Why the fallback dataset is showing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FallbackReason {
    /// The source failed or answered with a non-success status
    SourceFailed { status: Option<u16>, message: String },
    /// The sheet had too few rows to hold any data
    TooFewRows { rows: usize },
    /// Data rows were present but none named an estate
    NoEstates { rows: usize },
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceFailed {
                status: Some(status),
                message,
            } => write!(f, "sheet fetch failed with status {}: {}", status, message),
            Self::SourceFailed {
                status: None,
                message,
            } => write!(f, "sheet fetch failed: {}", message),
            Self::TooFewRows { rows } => write!(f, "sheet empty or no data ({} rows)", rows),
            Self::NoEstates { rows } => write!(f, "no estate rows among {} rows", rows),
        }
    }
}

/// Where the loaded estates came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoadOutcome {
    Loaded,
    Fallback(FallbackReason),
}

impl LoadOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Summary of one load attempt
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub outcome: LoadOutcome,

    /// Mapping statistics, when rows reached the mapper
    pub stats: Option<MapStats>,

    /// Number of estates handed to the presenter
    pub estates: usize,

    pub loaded_at: DateTime<Utc>,
}

/// Estates to load, with the report describing how they were obtained
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub kebuns: Vec<Kebun>,
    pub report: LoadReport,
}

impl LoadedDataset {
    fn loaded(kebuns: Vec<Kebun>, stats: MapStats) -> Self {
        let report = LoadReport {
            outcome: LoadOutcome::Loaded,
            stats: Some(stats),
            estates: kebuns.len(),
            loaded_at: Utc::now(),
        };
        Self { kebuns, report }
    }

    fn fallback(reason: FallbackReason, stats: Option<MapStats>) -> Self {
        warn!("Using fallback dataset: {}", reason);
        let kebuns = fallback_kebuns();
        let report = LoadReport {
            outcome: LoadOutcome::Fallback(reason),
            stats,
            estates: kebuns.len(),
            loaded_at: Utc::now(),
        };
        Self { kebuns, report }
    }
}

/// Fetches, parses, and maps the monitoring sheet
#[derive(Debug)]
pub struct DatasetLoader<S: SheetSource> {
    source: S,
    sheet: SheetRef,
    parser: SheetParser,
    cancellation: CancellationToken,
}

impl<S: SheetSource> DatasetLoader<S> {
    pub fn new(source: S, sheet: SheetRef, layout: ColumnLayout) -> Self {
        Self {
            source,
            sheet,
            parser: SheetParser::new(layout),
            cancellation: CancellationToken::new(),
        }
    }

    /// Tie this loader to an externally owned token
    ///
    /// Once the token is cancelled, responses that arrive are discarded.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn sheet(&self) -> &SheetRef {
        &self.sheet
    }

    /// Load the dataset, falling back to the built-in estates on any failure
    ///
    /// Returns `None` only when cancelled before the response arrived.
    pub async fn fetch_dataset(&self) -> Option<LoadedDataset> {
        info!("Loading monitoring sheet from {}", self.source.describe());

        let fetched = self.source.fetch_rows(&self.sheet).await;
        if self.cancellation.is_cancelled() {
            debug!("Load cancelled, discarding sheet response");
            return None;
        }

        let rows = match fetched {
            Ok(rows) => rows,
            Err(e) => {
                return Some(LoadedDataset::fallback(
                    FallbackReason::SourceFailed {
                        status: e.status(),
                        message: e.to_string(),
                    },
                    None,
                ));
            }
        };

        if rows.len() < MIN_USABLE_ROWS {
            return Some(LoadedDataset::fallback(
                FallbackReason::TooFewRows { rows: rows.len() },
                None,
            ));
        }

        let result = self.parser.map_grid(&rows);
        if result.kebuns.is_empty() {
            return Some(LoadedDataset::fallback(
                FallbackReason::NoEstates { rows: rows.len() },
                Some(result.stats),
            ));
        }

        Some(LoadedDataset::loaded(result.kebuns, result.stats))
    }
}

/// Built-in dataset shown whenever the sheet cannot be used
pub fn fallback_kebuns() -> Vec<Kebun> {
    vec![Kebun {
        id: "1KSD".to_string(),
        distrik: "DISTRIK JAWA BARAT".to_string(),
        singkatan_distrik: "1KSD".to_string(),
        kode: "1KSD".to_string(),
        unit: "A".to_string(),
        nama_kebun: "KEBUN SEI DAUN".to_string(),
        luas_ha: Some(7091.7),
        inventaris: Some(1_001_003.0),
        rumah: Some(1.0),
        coords: Some(Coords::new(1.67177745, 100.2937518)),
        pemupukan: Pemupukan {
            npk: 6985.83,
            dolomit: 4_405_748.0,
        },
        stok_pupuk: FertilizerPair {
            npk: 1_173_576.0,
            dolomit: 361_828.0,
        },
        realisasi: FertilizerPair {
            npk: 7025.0,
            dolomit: 2_898_900.0,
        },
    }]
}
