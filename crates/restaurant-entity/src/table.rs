//! Dining table entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{NewIdentity, Record};

/// A dining table orders are placed against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Unique table identifier.
    pub id: Uuid,
    /// String form of `id`.
    pub table_id: String,
    /// Seating capacity.
    pub number_of_guests: u32,
    /// Number painted on the table.
    pub table_number: u32,
    /// When the table was created.
    pub created_at: DateTime<Utc>,
    /// When the table was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Table {
    /// Create a new table with a generated identity.
    pub fn new(number_of_guests: u32, table_number: u32) -> Self {
        let identity = NewIdentity::generate();
        Self {
            id: identity.id,
            table_id: identity.key,
            number_of_guests,
            table_number,
            created_at: identity.now,
            updated_at: identity.now,
        }
    }
}

impl Record for Table {
    const COLLECTION: &'static str = "table";
    const KEY_FIELD: &'static str = "table_id";

    fn key(&self) -> &str {
        &self.table_id
    }

    fn id(&self) -> Uuid {
        self.id
    }
}
