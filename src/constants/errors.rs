//! Error message constants used throughout the application.

// Property errors
pub const ERR_PROPERTY_NOT_FOUND: &str = "Property not found";

// Filter validation errors
pub const ERR_INVALID_PAGE_NUMBER: &str = "Page number must be greater than zero";
pub const ERR_INVALID_PAGE_SIZE: &str = "Page size must be greater than zero";
pub const ERR_INVALID_PRICE_RANGE: &str = "Minimum price must be less than maximum price";

// Internal errors
pub const ERR_INTERNAL: &str = "An unexpected error occurred. Please try again later.";
