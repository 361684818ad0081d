//! Property repository: dynamic search plus static lookups.

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, Statement,
};

use super::entities::property::Entity as PropertyEntity;
use super::query;
use common::{AppError, AppResult};
use domain::{Property, PropertyFilters, PropertyListing};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Property repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Search properties by an arbitrary combination of optional filters.
    /// Results carry the average review rating and are priced-ascending.
    async fn search(
        &self,
        filters: PropertyFilters,
        limit: u64,
    ) -> AppResult<Vec<PropertyListing>>;

    /// Find a property by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Property>>;
}

/// Row shape of the aggregate search statement.
#[derive(Debug, FromQueryResult)]
struct PropertyListingRow {
    id: i32,
    owner_id: i32,
    title: String,
    description: String,
    thumbnail_photo_url: String,
    cover_photo_url: String,
    cost_per_night: i32,
    parking_spaces: i32,
    number_of_bathrooms: i32,
    number_of_bedrooms: i32,
    country: String,
    street: String,
    city: String,
    province: String,
    post_code: String,
    active: bool,
    average_rating: f64,
}

impl From<PropertyListingRow> for PropertyListing {
    fn from(row: PropertyListingRow) -> Self {
        PropertyListing {
            property: Property {
                id: row.id,
                owner_id: row.owner_id,
                title: row.title,
                description: row.description,
                thumbnail_photo_url: row.thumbnail_photo_url,
                cover_photo_url: row.cover_photo_url,
                cost_per_night: row.cost_per_night,
                parking_spaces: row.parking_spaces,
                number_of_bathrooms: row.number_of_bathrooms,
                number_of_bedrooms: row.number_of_bedrooms,
                country: row.country,
                street: row.street,
                city: row.city,
                province: row.province,
                post_code: row.post_code,
                active: row.active,
            },
            average_rating: row.average_rating,
        }
    }
}

/// Concrete implementation of PropertyRepository
pub struct PropertyStore {
    db: DatabaseConnection,
}

impl PropertyStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PropertyRepository for PropertyStore {
    async fn search(
        &self,
        filters: PropertyFilters,
        limit: u64,
    ) -> AppResult<Vec<PropertyListing>> {
        let plan = query::search_plan(&filters, limit);
        tracing::debug!(
            sql = %plan.sql,
            bound = plan.values.len(),
            unfiltered = filters.is_empty(),
            "built property search statement"
        );

        let statement = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            plan.sql,
            plan.values,
        );
        let rows = PropertyListingRow::find_by_statement(statement)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(PropertyListing::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Property>> {
        let result = PropertyEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Property::from))
    }
}
