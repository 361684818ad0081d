//! SeaORM entities for the statically-shaped tables.
//!
//! Aggregate projections (search listings, guest reservations) bypass these
//! and map raw rows instead; see the repository modules.

pub mod property;
pub mod user;
