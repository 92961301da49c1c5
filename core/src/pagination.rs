//! Stable windowing over the filtered record set.
//!
//! Pages are 1-based. Out-of-range requests yield an empty window, not
//! an error. The engine resets the page to 1 on every filter change.

use crate::record::BenchmarkRecord;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Explicit pagination state owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page:          usize,
    pub rows_per_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page:          1,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl PaginationState {
    pub fn with_rows_per_page(rows_per_page: usize) -> Self {
        Self {
            page: 1,
            rows_per_page,
        }
    }

    /// Back to page 1. Applied on every filter change.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Advance one page, clamped to the last page of `total_len` rows.
    pub fn next(&mut self, total_len: usize) {
        if self.page < total_pages(total_len, self.rows_per_page) {
            self.page += 1;
        }
    }

    /// Go back one page, clamped at 1.
    pub fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

/// The 1-based page window `[(page-1)*rows, page*rows)`, clipped to the
/// bounds of `filtered`. Page 0 or a page beyond the end is empty.
pub fn page_window(
    filtered: &[BenchmarkRecord],
    page: usize,
    rows_per_page: usize,
) -> &[BenchmarkRecord] {
    if page == 0 || rows_per_page == 0 {
        return &[];
    }
    let start = (page - 1) * rows_per_page;
    if start >= filtered.len() {
        return &[];
    }
    let end = (start + rows_per_page).min(filtered.len());
    &filtered[start..end]
}

/// `ceil(len / rows_per_page)`; 0 for an empty set.
pub fn total_pages(len: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 0;
    }
    len.div_ceil(rows_per_page)
}
