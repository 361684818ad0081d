//! Reservation repository: past stays for a guest.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement, Value};

use common::{AppError, AppResult};
use domain::{Property, Reservation, ReservationListing};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fixed aggregate statement: one row per completed reservation, joined with
/// its property and the property's average review rating.
const GUEST_RESERVATIONS_SQL: &str = "\
    SELECT properties.*, \
           reservations.id AS reservation_id, \
           reservations.start_date, \
           reservations.end_date, \
           reservations.guest_id, \
           avg(property_reviews.rating)::float8 AS average_rating \
    FROM reservations \
    JOIN properties ON reservations.property_id = properties.id \
    JOIN property_reviews ON properties.id = property_reviews.property_id \
    WHERE reservations.guest_id = $1 \
    AND reservations.end_date < now()::date \
    GROUP BY properties.id, reservations.id \
    ORDER BY reservations.start_date \
    LIMIT $2";

/// Reservation repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// List a guest's past reservations, oldest stay first.
    async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: u64,
    ) -> AppResult<Vec<ReservationListing>>;
}

/// Row shape of the guest reservations statement.
#[derive(Debug, FromQueryResult)]
struct ReservationRow {
    reservation_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    guest_id: i32,
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

impl From<ReservationRow> for ReservationListing {
    fn from(row: ReservationRow) -> Self {
        ReservationListing {
            reservation: Reservation {
                id: row.reservation_id,
                start_date: row.start_date,
                end_date: row.end_date,
                property_id: row.id,
                guest_id: row.guest_id,
            },
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

/// Concrete implementation of ReservationRepository
pub struct ReservationStore {
    db: DatabaseConnection,
}

impl ReservationStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReservationRepository for ReservationStore {
    async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: u64,
    ) -> AppResult<Vec<ReservationListing>> {
        let statement = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            GUEST_RESERVATIONS_SQL,
            [Value::from(guest_id), Value::from(limit as i64)],
        );
        let rows = ReservationRow::find_by_statement(statement)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(ReservationListing::from).collect())
    }
}
