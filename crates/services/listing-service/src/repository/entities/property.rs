//! Property database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Property;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly cost in minor currency units (cents)
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Property {
    fn from(model: Model) -> Self {
        Property {
            id: model.id,
            owner_id: model.owner_id,
            title: model.title,
            description: model.description,
            thumbnail_photo_url: model.thumbnail_photo_url,
            cover_photo_url: model.cover_photo_url,
            cost_per_night: model.cost_per_night,
            parking_spaces: model.parking_spaces,
            number_of_bathrooms: model.number_of_bathrooms,
            number_of_bedrooms: model.number_of_bedrooms,
            country: model.country,
            street: model.street,
            city: model.city,
            province: model.province,
            post_code: model.post_code,
            active: model.active,
        }
    }
}
