//! In-memory document store backed by dashmap.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use restaurant_core::error::AppError;
use restaurant_core::result::AppResult;
use restaurant_core::traits::store::DocumentStore;
use restaurant_core::types::{Document, Filter, InsertOutcome, Slice, UpdateOutcome};

#[derive(Debug, Clone)]
struct StoredDocument {
    id: String,
    body: Document,
}

/// Process-local document store.
///
/// Each collection is a vector in insertion order. Writes to one collection
/// hold that collection's shard lock for the whole operation, so the unique
/// checks and the write are atomic.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<DashMap<String, Vec<StoredDocument>>>,
    unique_fields: Arc<Vec<(String, String)>>,
}

impl MemoryDocumentStore {
    /// Create an empty store with no unique constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes that would give two documents in `collection` the
    /// same value for `field`.
    pub fn with_unique_index(mut self, collection: &str, field: &str) -> Self {
        let mut fields = self.unique_fields.as_ref().clone();
        fields.push((collection.to_string(), field.to_string()));
        self.unique_fields = Arc::new(fields);
        self
    }

    fn check_unique(
        &self,
        collection: &str,
        docs: &[StoredDocument],
        candidate: &Document,
        skip: Option<usize>,
    ) -> AppResult<()> {
        for (_, field) in self.unique_fields.iter().filter(|(c, _)| c == collection) {
            let Some(value) = candidate.get(field).filter(|v| !v.is_null()) else {
                continue;
            };
            let taken = docs
                .iter()
                .enumerate()
                .any(|(i, d)| Some(i) != skip && d.body.get(field) == Some(value));
            if taken {
                return Err(AppError::conflict(format!(
                    "A {collection} with this {field} already exists"
                )));
            }
        }
        Ok(())
    }
}

fn merge(target: &mut Document, patch: Document) -> bool {
    let mut changed = false;
    for (field, value) in patch {
        if target.get(&field) != Some(&value) {
            changed = true;
        }
        target.insert(field, value);
    }
    changed
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_one(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>> {
        Ok(self.collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|d| filter.matches(&d.body))
                .map(|d| d.body.clone())
        }))
    }

    async fn find(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Document>> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| filter.matches(&d.body))
                    .map(|d| d.body.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert_one(
        &self,
        collection: &str,
        id: &str,
        doc: Document,
    ) -> AppResult<InsertOutcome> {
        let mut docs = self.collections.entry(collection.to_string()).or_default();

        if docs.iter().any(|d| d.id == id) {
            return Err(AppError::conflict(format!(
                "Document '{id}' already exists in {collection}"
            )));
        }
        self.check_unique(collection, &docs, &doc, None)?;

        docs.push(StoredDocument {
            id: id.to_string(),
            body: doc,
        });
        debug!(collection, id, "Inserted document");

        Ok(InsertOutcome {
            inserted_id: id.to_string(),
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Document,
        upsert: bool,
    ) -> AppResult<UpdateOutcome> {
        let mut docs = self.collections.entry(collection.to_string()).or_default();

        if let Some(index) = docs.iter().position(|d| filter.matches(&d.body)) {
            let mut merged = docs[index].body.clone();
            let changed = merge(&mut merged, patch);
            self.check_unique(collection, &docs, &merged, Some(index))?;
            docs[index].body = merged;

            return Ok(UpdateOutcome {
                matched_count: 1,
                modified_count: u64::from(changed),
                upserted_id: None,
            });
        }

        if !upsert {
            return Ok(UpdateOutcome::default());
        }

        let mut body = filter.as_document().clone();
        merge(&mut body, patch);
        self.check_unique(collection, &docs, &body, None)?;

        let id = Uuid::new_v4().to_string();
        docs.push(StoredDocument {
            id: id.clone(),
            body,
        });
        debug!(collection, id = %id, "Upserted document");

        Ok(UpdateOutcome {
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id),
        })
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(&d.body)).count() as u64)
            .unwrap_or(0))
    }

    async fn slice(
        &self,
        collection: &str,
        filter: &Filter,
        offset: u64,
        limit: u64,
    ) -> AppResult<Slice<Document>> {
        let Some(docs) = self.collections.get(collection) else {
            return Ok(Slice::new(0, Vec::new()));
        };

        let matching: Vec<&StoredDocument> =
            docs.iter().filter(|d| filter.matches(&d.body)).collect();
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .map(|d| d.body.clone())
            .collect();

        Ok(Slice::new(total, items))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
