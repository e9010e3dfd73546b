//! Page arithmetic for the table

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ROWS_PER_PAGE;

/// One-based page position over a row list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    rows_per_page: usize,
    current_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

impl Pagination {
    /// Start on page 1; page sizes below 1 are raised to 1
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            rows_per_page: rows_per_page.max(1),
            current_page: 1,
        }
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages for `total_rows`; an empty table still has one page
    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.rows_per_page).max(1)
    }

    /// Move to `page` if it exists; returns whether the page changed
    pub fn go_to(&mut self, page: usize, total_rows: usize) -> bool {
        if page >= 1 && page <= self.total_pages(total_rows) {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    /// Change the page size and return to page 1
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.current_page = 1;
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Rows of the current page; empty when the page lies past the end
    pub fn page_slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1).saturating_mul(self.rows_per_page);
        if start >= rows.len() {
            return &[];
        }
        let end = start.saturating_add(self.rows_per_page).min(rows.len());
        &rows[start..end]
    }
}
