//! PostgreSQL document store using a single JSONB table.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use restaurant_core::error::AppError;
use restaurant_core::result::AppResult;
use restaurant_core::traits::store::DocumentStore;
use restaurant_core::types::{Document, Filter, InsertOutcome, Slice, UpdateOutcome};

use crate::connection::DocumentPool;

/// Document store over the `documents` table.
///
/// Filters use JSONB containment (`body @> $filter`), which for a flat object
/// of scalars is exactly field equality. Updates merge with `body || $patch`.
#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    db: DocumentPool,
}

impl PostgresDocumentStore {
    /// Create a store over an open pool.
    pub fn new(db: DocumentPool) -> Self {
        Self { db }
    }

    fn filter_value(filter: &Filter) -> Value {
        Value::Object(filter.as_document().clone())
    }
}

fn into_document(value: Value) -> AppResult<Document> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::database(format!(
            "Stored document is not a JSON object: {other}"
        ))),
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn find_one(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>> {
        let body: Option<Value> = sqlx::query_scalar(
            "SELECT body FROM documents WHERE collection = $1 AND body @> $2 ORDER BY seq LIMIT 1",
        )
        .bind(collection)
        .bind(Self::filter_value(filter))
        .fetch_optional(self.db.pool())
        .await?;

        body.map(into_document).transpose()
    }

    async fn find(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Document>> {
        let bodies: Vec<Value> = sqlx::query_scalar(
            "SELECT body FROM documents WHERE collection = $1 AND body @> $2 ORDER BY seq",
        )
        .bind(collection)
        .bind(Self::filter_value(filter))
        .fetch_all(self.db.pool())
        .await?;

        bodies.into_iter().map(into_document).collect()
    }

    async fn insert_one(
        &self,
        collection: &str,
        id: &str,
        doc: Document,
    ) -> AppResult<InsertOutcome> {
        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(id)
            .bind(Value::Object(doc))
            .execute(self.db.pool())
            .await?;

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
        let filter_value = Self::filter_value(filter);

        // `IS DISTINCT FROM` in RETURNING tells us whether the merge changed anything.
        let updated: Option<bool> = sqlx::query_scalar(
            r#"
            WITH target AS (
                SELECT seq, body AS before FROM documents
                WHERE collection = $1 AND body @> $2
                ORDER BY seq
                LIMIT 1
                FOR UPDATE
            )
            UPDATE documents d
            SET body = d.body || $3
            FROM target
            WHERE d.seq = target.seq
            RETURNING (target.before IS DISTINCT FROM d.body)
            "#,
        )
        .bind(collection)
        .bind(&filter_value)
        .bind(Value::Object(patch.clone()))
        .fetch_optional(self.db.pool())
        .await?;

        if let Some(changed) = updated {
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
        body.extend(patch);
        let id = Uuid::new_v4().to_string();
        self.insert_one(collection, &id, body).await?;

        Ok(UpdateOutcome {
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id),
        })
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM documents WHERE collection = $1 AND body @> $2",
        )
        .bind(collection)
        .bind(Self::filter_value(filter))
        .fetch_one(self.db.pool())
        .await?;

        Ok(total.max(0) as u64)
    }

    async fn slice(
        &self,
        collection: &str,
        filter: &Filter,
        offset: u64,
        limit: u64,
    ) -> AppResult<Slice<Document>> {
        let total = self.count(collection, filter).await?;

        let bodies: Vec<Value> = sqlx::query_scalar(
            r#"
            SELECT body FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY seq
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(collection)
        .bind(Self::filter_value(filter))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(self.db.pool())
        .await?;

        let items = bodies
            .into_iter()
            .map(into_document)
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Slice::new(total, items))
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.db.ping().await
    }

    async fn close(&self) -> AppResult<()> {
        self.db.close().await;
        Ok(())
    }
}
