//! Validation of incoming query parameters.

pub mod property;

pub use property::*;
