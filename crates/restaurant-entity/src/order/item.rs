//! Order line items.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{NewIdentity, Record};

/// Portion size of an ordered dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// Small.
    S,
    /// Medium.
    M,
    /// Large.
    L,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Quantity {
    type Err = restaurant_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            _ => Err(restaurant_core::AppError::validation(format!(
                "Invalid quantity: '{s}'. Expected one of: S, M, L"
            ))),
        }
    }
}

/// One dish on an order, priced at the time it was added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Unique item identifier.
    pub id: Uuid,
    /// String form of `id`.
    pub order_item_id: String,
    /// Order this item belongs to.
    pub order_id: String,
    /// Ordered dish.
    pub food_id: String,
    /// Portion size.
    pub quantity: Quantity,
    /// Dish price copied from the food record.
    pub unit_price: f64,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

impl OrderItem {
    /// Create a new order item with a generated identity.
    pub fn new(order_id: String, food_id: String, quantity: Quantity, unit_price: f64) -> Self {
        let identity = NewIdentity::generate();
        Self {
            id: identity.id,
            order_item_id: identity.key,
            order_id,
            food_id,
            quantity,
            unit_price,
            created_at: identity.now,
            updated_at: identity.now,
        }
    }
}

impl Record for OrderItem {
    const COLLECTION: &'static str = "order_item";
    const KEY_FIELD: &'static str = "order_item_id";

    fn key(&self) -> &str {
        &self.order_item_id
    }

    fn id(&self) -> Uuid {
        self.id
    }
}
