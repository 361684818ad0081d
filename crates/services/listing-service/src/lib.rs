//! Listing Service Library
//!
//! Data-access layer for the rental application: translates application
//! filter criteria into parameterized statements against PostgreSQL and maps
//! result rows back into domain records for users, reservations, and
//! properties. A JSON-file store backs property submissions that have not
//! reached the database yet.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;
pub mod store;

pub use config::ListingServiceConfig;
pub use infra::Database;
