//! Menu entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{NewIdentity, Record};

/// A named, categorized menu, optionally bounded in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    /// Unique menu identifier.
    pub id: Uuid,
    /// String form of `id`.
    pub menu_id: String,
    /// Menu name.
    pub name: String,
    /// Menu category (e.g. "dinner").
    pub category: String,
    /// When the menu becomes active.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// When the menu stops being active.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// When the menu was created.
    pub created_at: DateTime<Utc>,
    /// When the menu was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Menu {
    /// Create a new menu with a generated identity.
    pub fn new(
        name: String,
        category: String,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        let identity = NewIdentity::generate();
        Self {
            id: identity.id,
            menu_id: identity.key,
            name,
            category,
            start_date,
            end_date,
            created_at: identity.now,
            updated_at: identity.now,
        }
    }
}

impl Record for Menu {
    const COLLECTION: &'static str = "menu";
    const KEY_FIELD: &'static str = "menu_id";

    fn key(&self) -> &str {
        &self.menu_id
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

/// A schedule window is acceptable when it starts in the future and ends
/// after it starts.
pub fn in_time_span(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start > now && end > start
}
