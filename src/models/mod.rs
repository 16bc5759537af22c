//! Data models organized by type.

pub mod property;
pub mod requests;
pub mod responses;

pub use property::*;
pub use requests::*;
pub use responses::*;
