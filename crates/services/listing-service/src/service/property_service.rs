//! Property service - search, submissions, and guest reservations.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{
    NewProperty, Property, PropertyFilters, PropertyListing, ReservationListing,
    DEFAULT_RESULT_LIMIT,
};

use crate::repository::{PropertyRepository, ReservationRepository};
use crate::store::JsonStore;

/// Property service trait for dependency injection.
#[async_trait]
pub trait PropertyService: Send + Sync {
    /// Search property listings; `limit` defaults to
    /// [`DEFAULT_RESULT_LIMIT`] when not supplied.
    async fn search_properties(
        &self,
        filters: PropertyFilters,
        limit: Option<u64>,
    ) -> AppResult<Vec<PropertyListing>>;

    /// Get a property by ID
    async fn get_property(&self, id: i32) -> AppResult<Property>;

    /// Record a property submission in the JSON fallback store
    async fn add_property(&self, new_property: NewProperty) -> AppResult<Property>;

    /// List a guest's past reservations; `limit` defaults to
    /// [`DEFAULT_RESULT_LIMIT`] when not supplied.
    async fn reservations_for_guest(
        &self,
        guest_id: i32,
        limit: Option<u64>,
    ) -> AppResult<Vec<ReservationListing>>;
}

/// Concrete implementation of PropertyService.
pub struct PropertyManager {
    properties: Arc<dyn PropertyRepository>,
    reservations: Arc<dyn ReservationRepository>,
    store: Arc<JsonStore>,
}

impl PropertyManager {
    /// Create new property service instance
    pub fn new(
        properties: Arc<dyn PropertyRepository>,
        reservations: Arc<dyn ReservationRepository>,
        store: Arc<JsonStore>,
    ) -> Self {
        Self {
            properties,
            reservations,
            store,
        }
    }
}

#[async_trait]
impl PropertyService for PropertyManager {
    async fn search_properties(
        &self,
        filters: PropertyFilters,
        limit: Option<u64>,
    ) -> AppResult<Vec<PropertyListing>> {
        self.properties
            .search(filters, limit.unwrap_or(DEFAULT_RESULT_LIMIT))
            .await
    }

    async fn get_property(&self, id: i32) -> AppResult<Property> {
        self.properties.find_by_id(id).await?.ok_or_not_found()
    }

    async fn add_property(&self, new_property: NewProperty) -> AppResult<Property> {
        Ok(self.store.add_property(new_property).await)
    }

    async fn reservations_for_guest(
        &self,
        guest_id: i32,
        limit: Option<u64>,
    ) -> AppResult<Vec<ReservationListing>> {
        self.reservations
            .list_for_guest(guest_id, limit.unwrap_or(DEFAULT_RESULT_LIMIT))
            .await
    }
}
