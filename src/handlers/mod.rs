//! HTTP request handlers organized by domain.

pub mod property_handler;

pub use property_handler::*;
