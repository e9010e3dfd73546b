//! Core sheet export parser implementation
//!
//! This module splits export text into rows and cells and coordinates the
//! row mapper. Splitting is line-oriented: a quoted span never continues onto
//! the next line, so one malformed cell cannot swallow the rest of the sheet.

use tracing::{debug, info};

use super::column_mapping::ColumnLayout;
use super::row_mapper::map_rows;
use super::stats::MapResult;

/// Ordered rows of trimmed string cells, as produced by [`parse_rows`]
pub type Grid = Vec<Vec<String>>;

/// Split export text into rows of trimmed cells
///
/// Accepts `\n` and `\r\n` line endings. Blank lines produce no row, wherever
/// they occur. Never fails: malformed quoting yields best-effort cells.
pub fn parse_rows(text: &str) -> Grid {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

/// Split a single line into trimmed cells
///
/// Commas separate cells except inside a double-quoted span, and `""` inside
/// a quoted span is a literal quote. An unterminated quote runs to the end of
/// the line.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => cells.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    cells.push(current);

    cells.into_iter().map(|cell| cell.trim().to_string()).collect()
}

/// Parser for monitoring sheet exports
///
/// Binds a [`ColumnLayout`] so the choice of sheet variant is made once, at
/// construction, rather than at every call site.
#[derive(Debug, Clone)]
pub struct SheetParser {
    layout: ColumnLayout,
}

impl SheetParser {
    /// Create a new parser for the given column layout
    pub fn new(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    /// Column layout used by this parser
    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Parse raw export text into estates with statistics
    pub fn parse_text(&self, text: &str) -> MapResult {
        let rows = parse_rows(text);
        debug!("Split export text into {} non-blank rows", rows.len());
        self.map_grid(&rows)
    }

    /// Map an already-split grid into estates with statistics
    pub fn map_grid(&self, rows: &[Vec<String>]) -> MapResult {
        let result = map_rows(rows, &self.layout);

        info!(
            "Mapped {} estates from {} rows using the {} layout",
            result.stats.entities_mapped, result.stats.total_rows, self.layout.name
        );

        result
    }
}
