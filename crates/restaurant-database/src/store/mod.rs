//! Store manager that dispatches to the configured backend.

pub mod memory;
pub mod postgres;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use restaurant_core::config::{DatabaseConfig, StoreProvider};
use restaurant_core::error::AppError;
use restaurant_core::result::AppResult;
use restaurant_core::traits::store::DocumentStore;
use restaurant_core::types::{Document, Filter, InsertOutcome, Slice, UpdateOutcome};

use crate::connection::DocumentPool;

pub use memory::MemoryDocumentStore;
pub use postgres::PostgresDocumentStore;

/// Fields that must be unique within a collection.
///
/// Mirrored by the partial unique indexes in the migrations.
pub const UNIQUE_INDEXES: &[(&str, &str)] = &[("user", "email"), ("user", "phone")];

/// Store manager that wraps the configured backend and bounds every call
/// with the operation timeout.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store backend.
    inner: Arc<dyn DocumentStore>,
    /// Ceiling for a single store operation.
    timeout: Duration,
}

impl StoreManager {
    /// Create a store manager from configuration.
    ///
    /// For PostgreSQL this connects and, when enabled, runs migrations.
    /// A failure here is fatal to startup.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let inner: Arc<dyn DocumentStore> = match config.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL document store");
                let db = DocumentPool::open(config).await?;
                Arc::new(PostgresDocumentStore::new(db))
            }
            StoreProvider::Memory => {
                info!("Initializing in-memory document store");
                Arc::new(memory_store())
            }
        };

        Ok(Self {
            inner,
            timeout: Duration::from_secs(config.operation_timeout_seconds),
        })
    }

    /// Create a store manager from an existing backend (for testing).
    pub fn from_store(store: Arc<dyn DocumentStore>, timeout: Duration) -> Self {
        Self {
            inner: store,
            timeout,
        }
    }

    /// An in-memory store manager with the production unique indexes.
    pub fn in_memory(timeout: Duration) -> Self {
        Self::from_store(Arc::new(memory_store()), timeout)
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        collection: &str,
        fut: impl Future<Output = AppResult<T>> + Send,
    ) -> AppResult<T> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    operation,
                    collection,
                    timeout_secs = self.timeout.as_secs(),
                    "Store operation timed out"
                );
                Err(AppError::database(format!(
                    "Store operation '{operation}' on {collection} timed out"
                )))
            }
        }
    }
}

fn memory_store() -> MemoryDocumentStore {
    UNIQUE_INDEXES
        .iter()
        .fold(MemoryDocumentStore::new(), |store, (collection, field)| {
            store.with_unique_index(collection, field)
        })
}

#[async_trait]
impl DocumentStore for StoreManager {
    async fn find_one(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>> {
        self.bounded("find_one", collection, self.inner.find_one(collection, filter))
            .await
    }

    async fn find(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Document>> {
        self.bounded("find", collection, self.inner.find(collection, filter))
            .await
    }

    async fn insert_one(
        &self,
        collection: &str,
        id: &str,
        doc: Document,
    ) -> AppResult<InsertOutcome> {
        self.bounded(
            "insert_one",
            collection,
            self.inner.insert_one(collection, id, doc),
        )
        .await
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Document,
        upsert: bool,
    ) -> AppResult<UpdateOutcome> {
        self.bounded(
            "update_one",
            collection,
            self.inner.update_one(collection, filter, patch, upsert),
        )
        .await
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        self.bounded("count", collection, self.inner.count(collection, filter))
            .await
    }

    async fn slice(
        &self,
        collection: &str,
        filter: &Filter,
        offset: u64,
        limit: u64,
    ) -> AppResult<Slice<Document>> {
        self.bounded(
            "slice",
            collection,
            self.inner.slice(collection, filter, offset, limit),
        )
        .await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.bounded("health_check", "-", self.inner.health_check())
            .await
    }

    async fn close(&self) -> AppResult<()> {
        self.inner.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restaurant_core::error::ErrorKind;

    /// A backend whose every call outlives any reasonable timeout.
    #[derive(Debug)]
    struct StalledStore;

    #[async_trait]
    impl DocumentStore for StalledStore {
        async fn find_one(&self, _: &str, _: &Filter) -> AppResult<Option<Document>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(None)
        }
        async fn find(&self, _: &str, _: &Filter) -> AppResult<Vec<Document>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Vec::new())
        }
        async fn insert_one(&self, _: &str, id: &str, _: Document) -> AppResult<InsertOutcome> {
            Ok(InsertOutcome {
                inserted_id: id.to_string(),
            })
        }
        async fn update_one(
            &self,
            _: &str,
            _: &Filter,
            _: Document,
            _: bool,
        ) -> AppResult<UpdateOutcome> {
            Ok(UpdateOutcome::default())
        }
        async fn count(&self, _: &str, _: &Filter) -> AppResult<u64> {
            Ok(0)
        }
        async fn slice(&self, _: &str, _: &Filter, _: u64, _: u64) -> AppResult<Slice<Document>> {
            Ok(Slice::new(0, Vec::new()))
        }
        async fn health_check(&self) -> AppResult<bool> {
            Ok(true)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_operation_times_out_as_store_error() {
        let store = StoreManager::from_store(Arc::new(StalledStore), Duration::from_secs(100));

        let err = store
            .find_one("user", &Filter::eq("email", "a@x.com"))
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Database));
        assert!(err.message.contains("timed out"));
    }

    #[tokio::test]
    async fn test_in_memory_manager_enforces_unique_phone() -> AppResult<()> {
        let store = StoreManager::in_memory(Duration::from_secs(5));
        let mut doc = Document::new();
        doc.insert("phone".into(), "555".into());

        store.insert_one("user", "u1", doc.clone()).await?;
        let err = store.insert_one("user", "u2", doc).await.unwrap_err();
        assert!(err.is(ErrorKind::Conflict));
        Ok(())
    }
}
