//! Services organized by domain concern.

pub mod property_service;

pub use property_service::PropertyService;
