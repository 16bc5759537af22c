//! Repository layer for database operations.
//!
//! This module provides a clean separation between business logic (services)
//! and database operations (repositories), improving testability and maintainability.

pub mod property_repository;

pub use property_repository::PropertyRepository;
