//! Property listing query parameters.

use serde::Deserialize;

/// Raw query parameters for the property list endpoint.
///
/// Field names follow the wire contract consumed by the web client
/// (`name`, `address`, `minPrice`, `maxPrice`, `pageNumber`, `pageSize`).
/// Values are normalized and validated into a [`PropertyFilter`] before any
/// query executes.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilterQuery {
    /// Case-insensitive substring match against the property name
    pub name: Option<String>,
    /// Case-insensitive substring match against the property address
    pub address: Option<String>,
    /// Minimum price (inclusive)
    pub min_price: Option<f64>,
    /// Maximum price (inclusive)
    pub max_price: Option<f64>,
    pub page_number: Option<u64>,
    pub page_size: Option<u64>,
}

/// Validated and normalized set of search/pagination parameters for one
/// list call. Construct via [`crate::validators::validate_filter`].
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyFilter {
    pub name: Option<String>,
    pub address: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// 1-based page number, always >= 1
    pub page_number: u64,
    /// Items per page, always in 1..=MAX_PAGE_SIZE
    pub page_size: u64,
}
