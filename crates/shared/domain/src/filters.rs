//! Search criteria for property listings.

use serde::Deserialize;

/// Optional search constraints a caller may supply; any subset may be
/// omitted. `None` means "no constraint" - a present zero is a real bound,
/// not an absent filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyFilters {
    /// Case-insensitive substring match on the property's city
    pub city: Option<String>,
    /// Lower bound on nightly cost, in major currency units
    pub minimum_price_per_night: Option<i64>,
    /// Upper bound on nightly cost, in major currency units
    pub maximum_price_per_night: Option<i64>,
    /// Lower bound on the average review rating
    pub minimum_rating: Option<i32>,
}

impl PropertyFilters {
    /// True when no constraint is set at all.
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.minimum_price_per_night.is_none()
            && self.maximum_price_per_night.is_none()
            && self.minimum_rating.is_none()
    }
}
