//! Sheet sources for monitoring data
//!
//! A [`SheetSource`] turns a [`SheetRef`] into a parsed grid of cells, or an
//! error carrying an HTTP-like status. Failing is an expected outcome here:
//! the loader answers any error with the built-in fallback dataset.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::services::sheet_parser::{Grid, parse_rows};
use crate::constants::{DEFAULT_DOC_ID, DEFAULT_GID, SHEET_EXPORT_URL_TEMPLATE};
use crate::{Error, Result};

/// Identifies one tab of a spreadsheet document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRef {
    pub doc_id: String,
    pub gid: String,
}

impl SheetRef {
    pub fn new(doc_id: impl Into<String>, gid: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            gid: gid.into(),
        }
    }

    /// CSV export URL of this tab
    pub fn export_url(&self) -> String {
        SHEET_EXPORT_URL_TEMPLATE
            .replace("{doc_id}", &self.doc_id)
            .replace("{gid}", &self.gid)
    }

    /// Both identifiers are required; a request without them is a client error
    pub fn validate(&self) -> Result<()> {
        if self.doc_id.trim().is_empty() || self.gid.trim().is_empty() {
            return Err(Error::fetch(Some(400), "docId and gid required"));
        }
        Ok(())
    }
}

impl Default for SheetRef {
    fn default() -> Self {
        Self::new(DEFAULT_DOC_ID, DEFAULT_GID)
    }
}

/// Source of raw sheet rows
pub trait SheetSource {
    /// Fetch and split the referenced sheet into rows of cells
    fn fetch_rows(&self, sheet: &SheetRef) -> impl Future<Output = Result<Grid>> + Send;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Fetches the CSV export of a published spreadsheet over HTTP
#[derive(Debug, Clone, Default)]
pub struct HttpSheetSource {
    client: reqwest::Client,
}

impl HttpSheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (timeouts, proxies)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl SheetSource for HttpSheetSource {
    async fn fetch_rows(&self, sheet: &SheetRef) -> Result<Grid> {
        sheet.validate()?;
        let url = sheet.export_url();
        debug!("Fetching sheet export: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::http(format!("Failed fetching {}", url), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(
                Some(status.as_u16()),
                format!("Failed fetching sheet export from {}", url),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::http("Failed reading sheet export body", e))?;

        Ok(parse_rows(&text))
    }

    fn describe(&self) -> String {
        "spreadsheet CSV export (HTTP)".to_string()
    }
}

/// Reads a previously downloaded CSV export from disk
#[derive(Debug, Clone)]
pub struct FileSheetSource {
    path: PathBuf,
}

impl FileSheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetSource for FileSheetSource {
    async fn fetch_rows(&self, _sheet: &SheetRef) -> Result<Grid> {
        debug!("Reading sheet export file: {}", self.path.display());

        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::fetch(
                    Some(404),
                    format!("Sheet export not found: {}", self.path.display()),
                ),
                _ => Error::io(
                    format!("Failed to read sheet export {}", self.path.display()),
                    e,
                ),
            })?;

        Ok(parse_rows(&text))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_url() {
        let sheet = SheetRef::new("abc123", "42");
        assert_eq!(
            sheet.export_url(),
            "https://docs.google.com/spreadsheets/d/abc123/export?format=csv&gid=42"
        );
    }

    #[test]
    fn test_default_sheet_ref() {
        let sheet = SheetRef::default();
        assert_eq!(sheet.doc_id, DEFAULT_DOC_ID);
        assert_eq!(sheet.gid, "0");
        assert!(sheet.validate().is_ok());
    }

    #[test]
    fn test_missing_identifiers_are_client_errors() {
        let err = SheetRef::new("", "0").validate().unwrap_err();
        assert_eq!(err.status(), Some(400));

        let err = SheetRef::new("doc", "  ").validate().unwrap_err();
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn test_file_source_parses_rows() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "A,B\r\n\r\n\"x,y\",z\n").unwrap();

        let source = FileSheetSource::new(file.path());
        let rows = source.fetch_rows(&SheetRef::default()).await.unwrap();

        assert_eq!(rows, vec![vec!["A", "B"], vec!["x,y", "z"]]);
        assert!(source.describe().starts_with("file "));
    }

    #[tokio::test]
    async fn test_file_source_missing_file_reports_404() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSheetSource::new(dir.path().join("missing.csv"));

        let err = source.fetch_rows(&SheetRef::default()).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
