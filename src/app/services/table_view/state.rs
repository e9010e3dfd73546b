//! Sort and page state over the displayed rows

use tracing::debug;

use super::paging::Pagination;
use super::rows::{TableRow, project_rows};
use super::sorting::{SortConfig, SortKey, sort_rows};
use crate::app::services::monitoring::ViewSnapshot;

/// Table contents kept sorted under the active [`SortConfig`]
#[derive(Debug, Clone, Default)]
pub struct TableState {
    rows: Vec<TableRow>,
    sort: SortConfig,
    pagination: Pagination,
}

impl TableState {
    pub fn new(sort: SortConfig, pagination: Pagination) -> Self {
        Self {
            rows: Vec::new(),
            sort,
            pagination,
        }
    }

    /// Replace the rows with the estates of `snapshot`, keeping sort and page size
    pub fn set_snapshot(&mut self, snapshot: &ViewSnapshot) {
        self.set_rows(project_rows(snapshot.kebuns()));
    }

    pub fn set_rows(&mut self, mut rows: Vec<TableRow>) {
        sort_rows(&mut rows, &self.sort);
        self.rows = rows;
        if !self.pagination.go_to(self.pagination.current_page(), self.rows.len()) {
            self.pagination.reset();
        }
    }

    /// Sort by `key`, flipping direction if it is already active; back to page 1
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort.toggle(key);
        debug!("Sorting table by {} ({:?})", self.sort.key, self.sort.direction);
        sort_rows(&mut self.rows, &self.sort);
        self.pagination.reset();
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pagination.go_to(page, self.rows.len())
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.pagination.set_rows_per_page(rows_per_page);
    }

    pub fn sort(&self) -> &SortConfig {
        &self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.rows.len())
    }

    /// All rows in sort order, as exported
    pub fn sorted_rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Rows of the current page
    pub fn page_rows(&self) -> &[TableRow] {
        self.pagination.page_slice(&self.rows)
    }
}
