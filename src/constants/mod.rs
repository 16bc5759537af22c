//! Application constants module.
//!
//! Centralizes constant strings and numeric limits used throughout the
//! application: error messages and pagination bounds.

pub mod errors;
pub mod pagination;

pub use errors::*;
pub use pagination::*;
