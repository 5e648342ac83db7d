//! Schema-less document and equality filter types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON object as stored in a collection.
pub type Document = serde_json::Map<String, Value>;

/// Conjunction of field equality conditions.
///
/// An empty filter matches every document in a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter(Document);

impl Filter {
    /// A filter matching every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter with a single `field == value` condition.
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::all().and(field, value)
    }

    /// Add another `field == value` condition.
    pub fn and(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    /// Whether the filter has no conditions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Evaluate the filter against a document.
    pub fn matches(&self, doc: &Document) -> bool {
        self.0
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }

    /// The conditions as a JSON object.
    pub fn as_document(&self) -> &Document {
        &self.0
    }

    /// Consume the filter, returning its conditions.
    pub fn into_document(self) -> Document {
        self.0
    }
}

/// Result of an insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOutcome {
    /// Store id of the inserted document.
    pub inserted_id: String,
}

/// Result of an update with optional upsert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    /// Number of documents that matched the filter.
    pub matched_count: u64,
    /// Number of documents that were changed.
    pub modified_count: u64,
    /// Store id of the document created by an upsert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}
