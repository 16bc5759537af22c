//! Property filter validation and normalization.
//!
//! Validation happens once at the HTTP boundary, before any storage access.
//! The output is a [`PropertyFilter`] whose pagination fields are guaranteed
//! to be in range, so the repository never has to re-check them.

use crate::constants::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, ERR_INVALID_PAGE_NUMBER, ERR_INVALID_PAGE_SIZE,
    ERR_INVALID_PRICE_RANGE, MAX_PAGE_SIZE,
};
use crate::errors::ApiError;
use crate::models::{PropertyFilter, PropertyFilterQuery};

/// Reasons a filter request can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    InvalidPageNumber,
    InvalidPageSize,
    InvalidPriceRange,
}

impl FilterError {
    pub fn message(&self) -> &'static str {
        match self {
            FilterError::InvalidPageNumber => ERR_INVALID_PAGE_NUMBER,
            FilterError::InvalidPageSize => ERR_INVALID_PAGE_SIZE,
            FilterError::InvalidPriceRange => ERR_INVALID_PRICE_RANGE,
        }
    }
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        ApiError::BadRequest(err.message().to_string())
    }
}

/// Cap the page size at [`MAX_PAGE_SIZE`].
///
/// Oversized values are silently reduced rather than rejected, so a request
/// for 500 items per page behaves exactly like a request for 100.
pub fn clamp_page_size(page_size: u64) -> u64 {
    page_size.min(MAX_PAGE_SIZE)
}

/// Validate raw query parameters and normalize them into a [`PropertyFilter`].
///
/// Rules:
/// - page number must be > 0 (default 1)
/// - page size must be > 0 (default 20, clamped to 100)
/// - when both prices are present, min must be strictly below max
///
/// Blank text filters are treated as absent. No other fields are validated.
pub fn validate_filter(query: &PropertyFilterQuery) -> Result<PropertyFilter, FilterError> {
    let page_number = query.page_number.unwrap_or(DEFAULT_PAGE_NUMBER);
    if page_number == 0 {
        return Err(FilterError::InvalidPageNumber);
    }

    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size == 0 {
        return Err(FilterError::InvalidPageSize);
    }
    let page_size = clamp_page_size(page_size);

    if let (Some(min_price), Some(max_price)) = (query.min_price, query.max_price) {
        if min_price >= max_price {
            return Err(FilterError::InvalidPriceRange);
        }
    }

    Ok(PropertyFilter {
        name: normalize_text_filter(query.name.as_deref()),
        address: normalize_text_filter(query.address.as_deref()),
        min_price: query.min_price,
        max_price: query.max_price,
        page_number,
        page_size,
    })
}

/// Trim a text filter and drop it entirely when blank.
fn normalize_text_filter(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_absent() {
        let filter = validate_filter(&PropertyFilterQuery::default()).unwrap();
        assert_eq!(filter.page_number, 1);
        assert_eq!(filter.page_size, 20);
        assert_eq!(filter.name, None);
        assert_eq!(filter.address, None);
        assert_eq!(filter.min_price, None);
        assert_eq!(filter.max_price, None);
    }

    #[test]
    fn test_zero_page_number_rejected() {
        let query = PropertyFilterQuery {
            page_number: Some(0),
            ..Default::default()
        };
        assert_eq!(
            validate_filter(&query).unwrap_err(),
            FilterError::InvalidPageNumber
        );
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let query = PropertyFilterQuery {
            page_size: Some(0),
            ..Default::default()
        };
        assert_eq!(
            validate_filter(&query).unwrap_err(),
            FilterError::InvalidPageSize
        );
    }

    #[test]
    fn test_oversized_page_size_clamped_not_rejected() {
        let query = PropertyFilterQuery {
            page_size: Some(500),
            ..Default::default()
        };
        let filter = validate_filter(&query).unwrap();
        assert_eq!(filter.page_size, 100);

        let query = PropertyFilterQuery {
            page_size: Some(100),
            ..Default::default()
        };
        assert_eq!(validate_filter(&query).unwrap(), filter);
    }

    #[test]
    fn test_inverted_price_range_rejected() {
        let query = PropertyFilterQuery {
            min_price: Some(500.0),
            max_price: Some(100.0),
            ..Default::default()
        };
        assert_eq!(
            validate_filter(&query).unwrap_err(),
            FilterError::InvalidPriceRange
        );
    }

    #[test]
    fn test_equal_prices_rejected() {
        let query = PropertyFilterQuery {
            min_price: Some(100.0),
            max_price: Some(100.0),
            ..Default::default()
        };
        assert_eq!(
            validate_filter(&query).unwrap_err(),
            FilterError::InvalidPriceRange
        );
    }

    #[test]
    fn test_valid_request_passes() {
        let query = PropertyFilterQuery {
            page_number: Some(1),
            page_size: Some(20),
            min_price: Some(100.0),
            max_price: Some(200.0),
            ..Default::default()
        };
        let filter = validate_filter(&query).unwrap();
        assert_eq!(filter.min_price, Some(100.0));
        assert_eq!(filter.max_price, Some(200.0));
    }

    #[test]
    fn test_single_price_bound_needs_no_counterpart() {
        let query = PropertyFilterQuery {
            min_price: Some(200000.0),
            ..Default::default()
        };
        assert!(validate_filter(&query).is_ok());
    }

    #[test]
    fn test_blank_text_filters_dropped() {
        let query = PropertyFilterQuery {
            name: Some("   ".to_string()),
            address: Some(" Elm Street ".to_string()),
            ..Default::default()
        };
        let filter = validate_filter(&query).unwrap();
        assert_eq!(filter.name, None);
        assert_eq!(filter.address, Some("Elm Street".to_string()));
    }
}
