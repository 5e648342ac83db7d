//! Document store trait for pluggable persistence backends.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::result::AppResult;
use crate::types::document::{Document, Filter, InsertOutcome, UpdateOutcome};
use crate::types::pagination::Slice;

/// Trait for document store backends (PostgreSQL JSONB or in-memory).
///
/// Documents live in named collections and are addressed by a store id.
/// Filters are conjunctions of top-level field equalities. Iteration order
/// is insertion order.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the first document matching the filter.
    async fn find_one(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>>;

    /// Return every document matching the filter.
    async fn find(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Document>>;

    /// Insert a document under the given store id.
    async fn insert_one(
        &self,
        collection: &str,
        id: &str,
        doc: Document,
    ) -> AppResult<InsertOutcome>;

    /// Shallow-merge `patch` into the first document matching `filter`.
    ///
    /// With `upsert`, a missing document is created from the filter fields
    /// merged with the patch.
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Document,
        upsert: bool,
    ) -> AppResult<UpdateOutcome>;

    /// Count documents matching the filter.
    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64>;

    /// Return `limit` matching documents starting at `offset`, plus the total.
    async fn slice(
        &self,
        collection: &str,
        filter: &Filter,
        offset: u64,
        limit: u64,
    ) -> AppResult<Slice<Document>>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Release backend resources at shutdown.
    async fn close(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Serialize a typed record into a document.
pub fn to_document<T: Serialize>(value: &T) -> AppResult<Document> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(AppError::internal(format!(
            "Expected a JSON object, got {other}"
        ))),
    }
}

/// Deserialize a document into a typed record.
pub fn from_document<T: DeserializeOwned>(doc: Document) -> AppResult<T> {
    Ok(serde_json::from_value(serde_json::Value::Object(doc))?)
}
