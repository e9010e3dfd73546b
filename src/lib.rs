//! Kebun Monitor Library
//!
//! A Rust library for monitoring fertilization plans against realization
//! figures for plantation estates (kebun), as published in a shared
//! spreadsheet export.
//!
//! This library provides tools for:
//! - Parsing sheet exports into a grid of trimmed string cells
//! - Mapping positional rows onto typed estate records via named column layouts
//! - Grouping estates by district and computing remaining/realized metrics
//! - Tracking the selected estate and emitting synchronized view snapshots
//! - Projecting estates into table rows for sorting, paging, and export
//! - Falling back to a built-in dataset whenever the sheet cannot be used

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregation;
        pub mod map_view;
        pub mod monitoring;
        pub mod sheet_parser;
        pub mod sheet_source;
        pub mod table_view;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod console;
}

// Re-export commonly used types
pub use app::models::{Coords, DistrictGroup, FertilizerPair, Kebun, KebunMetrics, Pemupukan};
pub use config::Config;

/// Result type alias for the kebun monitor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for kebun monitor operations
///
/// Row-level problems never surface here: the parser and mapper absorb them.
/// What remains are failures at the true I/O edges.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding error while exporting
    #[error("CSV export error for '{file}': {message}")]
    Csv {
        file: String,
        message: String,
        #[source]
        source: csv::Error,
    },

    /// JSON encoding or decoding error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The sheet source answered with a failure status or no body
    #[error("Sheet fetch failed{}: {message}", status_suffix(.status))]
    Fetch { status: Option<u16>, message: String },

    /// HTTP transport error
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Export request could not be satisfied
    #[error("Export error: {message}")]
    Export { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV export error with context
    pub fn csv(file: impl Into<String>, message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a fetch error carrying the upstream status, if any
    pub fn fetch(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Fetch {
            status,
            message: message.into(),
        }
    }

    /// Create an HTTP transport error
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an export error
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// HTTP-like status attached to a fetch error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => *status,
            Self::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display_includes_status() {
        let err = Error::fetch(Some(502), "bad gateway");
        assert_eq!(err.to_string(), "Sheet fetch failed (status 502): bad gateway");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_fetch_error_display_without_status() {
        let err = Error::fetch(None, "connection refused");
        assert_eq!(err.to_string(), "Sheet fetch failed: connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_configuration_error() {
        let err = Error::configuration("doc id must not be empty");
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("doc id must not be empty"));
    }
}
