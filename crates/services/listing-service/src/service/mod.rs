//! Service layer - application use cases over the repositories.

mod property_service;
mod user_service;

pub use property_service::{PropertyManager, PropertyService};
pub use user_service::{UserManager, UserService};
