//! In-memory store seeded from JSON files.
//!
//! Property submissions land here instead of the database; records live in
//! memory for the lifetime of the process and the seed files are never
//! written back.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tokio::sync::RwLock;

use common::AppResult;
use domain::{NewProperty, Property, User};

/// Seed file holding users keyed by id
const USERS_FILE: &str = "users.json";
/// Seed file holding properties keyed by id
const PROPERTIES_FILE: &str = "properties.json";

/// JSON-file fallback store for users and properties.
pub struct JsonStore {
    users: RwLock<HashMap<i32, User>>,
    properties: RwLock<HashMap<i32, Property>>,
}

impl JsonStore {
    /// Load the store from `users.json` and `properties.json` in `dir`.
    pub fn load(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref();
        let users: HashMap<i32, User> =
            serde_json::from_str(&fs::read_to_string(dir.join(USERS_FILE))?)?;
        let properties: HashMap<i32, Property> =
            serde_json::from_str(&fs::read_to_string(dir.join(PROPERTIES_FILE))?)?;

        tracing::info!(
            users = users.len(),
            properties = properties.len(),
            "loaded JSON fallback store"
        );

        Ok(Self::from_parts(users, properties))
    }

    /// Build a store from already-materialized maps.
    pub fn from_parts(
        users: HashMap<i32, User>,
        properties: HashMap<i32, Property>,
    ) -> Self {
        Self {
            users: RwLock::new(users),
            properties: RwLock::new(properties),
        }
    }

    /// Look up a user by id.
    pub async fn user(&self, id: i32) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    /// Look up a property by id.
    pub async fn property(&self, id: i32) -> Option<Property> {
        self.properties.read().await.get(&id).cloned()
    }

    /// Number of stored properties.
    pub async fn property_count(&self) -> usize {
        self.properties.read().await.len()
    }

    /// Store a new property under the next id and return it.
    pub async fn add_property(&self, new_property: NewProperty) -> Property {
        let mut properties = self.properties.write().await;
        let id = properties.len() as i32 + 1;
        let property = new_property.into_property(id);
        properties.insert(id, property.clone());
        property
    }
}
