//! Food entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{NewIdentity, Record};

/// A dish belonging to a menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Unique food identifier.
    pub id: Uuid,
    /// String form of `id`.
    pub food_id: String,
    /// Dish name.
    pub name: String,
    /// Price, rounded to two decimals.
    pub price: f64,
    /// Image URL.
    pub food_image: String,
    /// Owning menu.
    pub menu_id: String,
    /// When the food was created.
    pub created_at: DateTime<Utc>,
    /// When the food was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Food {
    /// Create a new food with a generated identity. The price is rounded.
    pub fn new(name: String, price: f64, food_image: String, menu_id: String) -> Self {
        let identity = NewIdentity::generate();
        Self {
            id: identity.id,
            food_id: identity.key,
            name,
            price: round_price(price),
            food_image,
            menu_id,
            created_at: identity.now,
            updated_at: identity.now,
        }
    }
}

impl Record for Food {
    const COLLECTION: &'static str = "food";
    const KEY_FIELD: &'static str = "food_id";

    fn key(&self) -> &str {
        &self.food_id
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Round a price to two decimal places.
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
