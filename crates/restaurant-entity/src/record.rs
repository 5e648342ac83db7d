//! The [`Record`] trait shared by every stored entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// A typed document living in a named collection.
///
/// Every record carries a generated UUID and a human-readable secondary id
/// (`<entity>_id`) holding the same value as a string. Lookups go through
/// the secondary id.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name in the document store.
    const COLLECTION: &'static str;
    /// Name of the secondary id field used for lookups.
    const KEY_FIELD: &'static str;

    /// The secondary id value.
    fn key(&self) -> &str;

    /// Generated primary id.
    fn id(&self) -> Uuid;
}

/// Fresh identity for a new record: primary id, secondary id, timestamp.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    /// Generated primary id.
    pub id: Uuid,
    /// String form of `id`.
    pub key: String,
    /// Creation time, also used as the first `updated_at`.
    pub now: DateTime<Utc>,
}

impl NewIdentity {
    /// Generate a new identity stamped with the current time.
    pub fn generate() -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            key: id.to_string(),
            now: Utc::now(),
        }
    }
}
