//! Reservation domain entity and guest-facing listing projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::property::Property;

/// Reservation domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: i32,
    pub guest_id: i32,
}

/// A past reservation joined with its property and the property's average
/// review rating, as shown on a guest's "my reservations" page.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationListing {
    pub reservation: Reservation,
    pub property: Property,
    pub average_rating: f64,
}
