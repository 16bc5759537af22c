//! Request models for the HTTP boundary.

pub mod property;

pub use property::*;
