//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size when the caller omits or garbles `recordPerPage`.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Default page number.
pub const DEFAULT_PAGE: u64 = 1;

/// Resolved pagination window for a slice query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Caller-supplied start offset. Takes precedence over `page`.
    pub start_index: Option<u64>,
}

impl PageRequest {
    /// Create a new page request from already-parsed values.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            start_index: None,
        }
    }

    /// Build a page request from raw query-string values.
    ///
    /// `record_per_page` and `page` fall back to 10 and 1 when absent,
    /// unparsable or below 1. `start_index` overrides the computed offset
    /// only when it parses as a non-negative integer.
    pub fn from_query(
        record_per_page: Option<&str>,
        page: Option<&str>,
        start_index: Option<&str>,
    ) -> Self {
        let page_size = parse_positive(record_per_page).unwrap_or(DEFAULT_PAGE_SIZE);
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let start_index = start_index.and_then(|s| s.trim().parse::<u64>().ok());

        Self {
            page,
            page_size,
            start_index,
        }
    }

    /// Offset of the first item in the window.
    ///
    /// Saturates at `u64::MAX`, which selects an empty window.
    pub fn offset(&self) -> u64 {
        self.start_index
            .unwrap_or_else(|| self.page.saturating_sub(1).saturating_mul(self.page_size))
    }

    /// Maximum number of items in the window.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|v| *v >= 1)
}

/// A window of items plus the total number of matching items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slice<T> {
    /// Number of items matching the query, ignoring the window.
    pub total_count: u64,
    /// Items inside the window.
    pub items: Vec<T>,
}

impl<T> Slice<T> {
    /// Create a new slice.
    pub fn new(total_count: u64, items: Vec<T>) -> Self {
        Self { total_count, items }
    }

    /// Convert each item, keeping the total.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Slice<U> {
        Slice {
            total_count: self.total_count,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Convert each item with a fallible function.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Slice<U>, E> {
        Ok(Slice {
            total_count: self.total_count,
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
        })
    }
}
