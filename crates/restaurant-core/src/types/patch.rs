//! Partial update builder.

use chrono::Utc;
use serde::Serialize;

use crate::result::AppResult;
use crate::types::document::Document;

/// Field name stamped on every patch.
pub const UPDATED_AT: &str = "updated_at";

/// Accumulates only the fields a caller actually sent, then hands them to
/// the store as one merge.
#[derive(Debug, Clone, Default)]
pub struct DocumentPatch {
    fields: Document,
}

impl DocumentPatch {
    /// Start an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field unconditionally.
    pub fn set<T: Serialize>(mut self, field: &str, value: T) -> AppResult<Self> {
        self.fields
            .insert(field.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Set a field only when a value is present.
    pub fn set_opt<T: Serialize>(self, field: &str, value: Option<T>) -> AppResult<Self> {
        match value {
            Some(value) => self.set(field, value),
            None => Ok(self),
        }
    }

    /// Whether no caller fields were recorded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of the recorded fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Finish the patch, stamping `updated_at` with the current time.
    pub fn finish(mut self) -> AppResult<Document> {
        self.fields
            .insert(UPDATED_AT.to_string(), serde_json::to_value(Utc::now())?);
        Ok(self.fields)
    }
}
