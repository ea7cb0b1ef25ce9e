use std::fmt;

use crate::types::PageInfo;

/// Position within a paginated list plus prev/next availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
    has_prev: bool,
    has_next: bool,
}

impl Pagination {
    /// Builds the pagination state for `page` from a list response.
    ///
    /// Prev/next availability follows the `prev`/`next` links, not the page
    /// arithmetic.
    #[must_use]
    pub fn from_info(page: u32, info: &PageInfo) -> Self {
        Self {
            page,
            total_pages: info.pages,
            has_prev: info.prev.is_some(),
            has_next: info.next.is_some(),
        }
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.has_prev
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// The previous page number, if there is a previous page.
    #[must_use]
    pub fn prev_page(&self) -> Option<u32> {
        self.has_prev.then(|| self.page.saturating_sub(1).max(1))
    }

    /// The next page number, if there is a next page.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.has_next.then(|| self.page.saturating_add(1))
    }
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.page, self.total_pages)
    }
}

/// Reads a page number from a query parameter.
///
/// Missing, non-numeric and zero values all mean the first page.
#[must_use]
pub fn parse_page(param: Option<&str>) -> u32 {
    param
        .and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|&p| p > 0)
        .unwrap_or(1)
}
