//! Generic repository for any [`Record`] type.

use std::marker::PhantomData;

use restaurant_core::error::AppError;
use restaurant_core::result::AppResult;
use restaurant_core::traits::store::{DocumentStore, from_document, to_document};
use restaurant_core::types::{DocumentPatch, Filter, InsertOutcome, PageRequest, Slice};
use restaurant_entity::Record;

use crate::store::StoreManager;

/// Typed access to the collection holding `T`.
#[derive(Debug)]
pub struct RecordRepository<T> {
    store: StoreManager,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for RecordRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> RecordRepository<T> {
    /// Create a new repository over the store.
    pub fn new(store: StoreManager) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Filter selecting a record by its secondary id.
    pub fn key_filter(key: &str) -> Filter {
        Filter::eq(T::KEY_FIELD, key)
    }

    /// Find a record by its secondary id.
    pub async fn find_by_key(&self, key: &str) -> AppResult<Option<T>> {
        self.find_one_by(&Self::key_filter(key)).await
    }

    /// Find a record by its secondary id, failing with not-found.
    pub async fn get(&self, key: &str) -> AppResult<T> {
        self.find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found(format!("{} '{key}' not found", T::COLLECTION)))
    }

    /// Find the first record matching a filter.
    pub async fn find_one_by(&self, filter: &Filter) -> AppResult<Option<T>> {
        self.store
            .find_one(T::COLLECTION, filter)
            .await?
            .map(from_document)
            .transpose()
    }

    /// Every record matching a filter, in insertion order.
    pub async fn find_by(&self, filter: &Filter) -> AppResult<Vec<T>> {
        self.store
            .find(T::COLLECTION, filter)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }

    /// Every record in the collection.
    pub async fn find_all(&self) -> AppResult<Vec<T>> {
        self.find_by(&Filter::all()).await
    }

    /// One page of records matching a filter, with the total count.
    pub async fn find_page(&self, filter: &Filter, page: &PageRequest) -> AppResult<Slice<T>> {
        self.store
            .slice(T::COLLECTION, filter, page.offset(), page.limit())
            .await?
            .try_map(from_document)
    }

    /// Count records matching a filter.
    pub async fn count_by(&self, filter: &Filter) -> AppResult<u64> {
        self.store.count(T::COLLECTION, filter).await
    }

    /// Whether a record with this secondary id exists.
    pub async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.count_by(&Self::key_filter(key)).await? > 0)
    }

    /// Insert a new record under its secondary id.
    pub async fn insert(&self, record: &T) -> AppResult<InsertOutcome> {
        self.store
            .insert_one(T::COLLECTION, record.key(), to_document(record)?)
            .await
    }

    /// Merge a patch into an existing record and return the updated record.
    ///
    /// Fails with not-found when no record has this secondary id.
    pub async fn update(&self, key: &str, patch: DocumentPatch) -> AppResult<T> {
        let filter = Self::key_filter(key);
        let outcome = self
            .store
            .update_one(T::COLLECTION, &filter, patch.finish()?, false)
            .await?;

        if outcome.matched_count == 0 {
            return Err(AppError::not_found(format!(
                "{} '{key}' not found",
                T::COLLECTION
            )));
        }
        self.get(key).await
    }
}
