//! Response models for the HTTP boundary.

pub mod api;
pub mod pagination;
pub mod property;

pub use api::*;
pub use pagination::*;
pub use property::*;
