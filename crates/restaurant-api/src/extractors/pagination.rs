//! Pagination query parameters.

use serde::Deserialize;

use restaurant_core::types::PageRequest;

/// `?recordPerPage=&page=&startIndex=` as sent by clients.
///
/// Values are kept as raw strings so that unparsable input falls back to
/// the defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(rename = "recordPerPage")]
    pub record_per_page: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "startIndex")]
    pub start_index: Option<String>,
}

impl PaginationParams {
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::from_query(
            self.record_per_page.as_deref(),
            self.page.as_deref(),
            self.start_index.as_deref(),
        )
    }
}
