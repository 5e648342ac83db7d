//! Order entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{NewIdentity, Record};

/// An order placed at a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: Uuid,
    /// String form of `id`.
    pub order_id: String,
    /// When the order was placed.
    pub order_date: DateTime<Utc>,
    /// Table the order belongs to.
    pub table_id: String,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order with a generated identity.
    pub fn new(order_date: DateTime<Utc>, table_id: String) -> Self {
        let identity = NewIdentity::generate();
        Self {
            id: identity.id,
            order_id: identity.key,
            order_date,
            table_id,
            created_at: identity.now,
            updated_at: identity.now,
        }
    }
}

impl Record for Order {
    const COLLECTION: &'static str = "order";
    const KEY_FIELD: &'static str = "order_id";

    fn key(&self) -> &str {
        &self.order_id
    }

    fn id(&self) -> Uuid {
        self.id
    }
}
