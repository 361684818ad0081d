//! Repository layer for data access.

pub mod entities;
pub mod query;

mod property_repository;
mod reservation_repository;
mod user_repository;

pub use property_repository::{PropertyRepository, PropertyStore};
pub use query::{search_plan, PlanBuilder, QueryPlan};
pub use reservation_repository::{ReservationRepository, ReservationStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use property_repository::MockPropertyRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use reservation_repository::MockReservationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
