//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! All types here are shared between the data-access service and its callers.

pub mod constants;
pub mod filters;
pub mod property;
pub mod reservation;
pub mod user;

pub use constants::*;
pub use filters::PropertyFilters;
pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::{Reservation, ReservationListing};
pub use user::{CreateUser, User, UserResponse};
