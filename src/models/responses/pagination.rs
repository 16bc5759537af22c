//! Pagination response models.

use serde::Serialize;
use utoipa::ToSchema;

/// Paginated list response
///
/// Derived metadata is computed from the total matching count and the
/// requested page size, never from the number of items actually returned.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = PaginatedPropertyResponse)]
pub struct PaginatedResponse<T: Serialize> {
    /// One page of items; at most `page_size` entries
    pub items: Vec<T>,
    /// Requested page number (1-based)
    pub page_number: u64,
    /// Requested items per page
    pub page_size: u64,
    /// Total number of items matching the filter across all pages
    pub total_count: u64,
    /// Total number of pages; 0 when nothing matches
    pub total_pages: u64,
    /// Whether a previous page exists
    pub has_previous_page: bool,
    /// Whether a next page exists
    pub has_next_page: bool,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Wrap one page of items with derived pagination metadata.
    ///
    /// `page_size` must be >= 1, which validation guarantees.
    pub fn new(items: Vec<T>, total_count: u64, page_number: u64, page_size: u64) -> Self {
        let total_pages = total_count.div_ceil(page_size);

        Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages,
            has_previous_page: page_number > 1,
            has_next_page: page_number < total_pages,
        }
    }
}
