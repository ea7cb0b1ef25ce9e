use serde::{Deserialize, Serialize};

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of matching resources.
    pub count: u32,
    /// Total number of pages.
    pub pages: u32,
    /// Link to the next page, `None` on the last one.
    pub next: Option<String>,
    /// Link to the previous page, `None` on the first one.
    pub prev: Option<String>,
}

/// A page of a list endpoint such as `GET /character?page=2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub info: PageInfo,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Returns `true` if the page holds no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
