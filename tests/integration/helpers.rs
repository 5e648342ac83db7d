//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use restaurant_api::{AppState, build_app};
use restaurant_core::config::{AppConfig, AuthConfig, DatabaseConfig, StoreProvider};
use restaurant_core::result::AppResult;
use restaurant_core::traits::store::DocumentStore;
use restaurant_core::types::{Document, Filter, InsertOutcome, Slice, UpdateOutcome};
use restaurant_database::StoreManager;

/// Signing secret shared by the app under test and hand-made tokens.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Password used by [`TestApp::sign_up`].
pub const TEST_PASSWORD: &str = "hunter22";

/// Wraps a store and counts every call that reaches it.
#[derive(Debug)]
pub struct CountingStore {
    inner: StoreManager,
    calls: Arc<AtomicUsize>,
}

impl CountingStore {
    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn find_one(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>> {
        self.hit();
        self.inner.find_one(collection, filter).await
    }

    async fn find(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Document>> {
        self.hit();
        self.inner.find(collection, filter).await
    }

    async fn insert_one(
        &self,
        collection: &str,
        id: &str,
        doc: Document,
    ) -> AppResult<InsertOutcome> {
        self.hit();
        self.inner.insert_one(collection, id, doc).await
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Document,
        upsert: bool,
    ) -> AppResult<UpdateOutcome> {
        self.hit();
        self.inner.update_one(collection, filter, patch, upsert).await
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        self.hit();
        self.inner.count(collection, filter).await
    }

    async fn slice(
        &self,
        collection: &str,
        filter: &Filter,
        offset: u64,
        limit: u64,
    ) -> AppResult<Slice<Document>> {
        self.hit();
        self.inner.slice(collection, filter, offset, limit).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    calls: Arc<AtomicUsize>,
}

impl TestApp {
    /// Create a new test application on a fresh in-memory store
    pub fn new() -> Self {
        let config = AppConfig {
            database: DatabaseConfig {
                provider: StoreProvider::Memory,
                operation_timeout_seconds: 5,
                ..DatabaseConfig::default()
            },
            auth: AuthConfig {
                jwt_secret: TEST_SECRET.to_string(),
                ..AuthConfig::default()
            },
            ..AppConfig::default()
        };

        let timeout = Duration::from_secs(config.database.operation_timeout_seconds);
        let calls = Arc::new(AtomicUsize::new(0));
        let counting = CountingStore {
            inner: StoreManager::in_memory(timeout),
            calls: Arc::clone(&calls),
        };
        let store = StoreManager::from_store(Arc::new(counting), timeout);

        Self {
            router: build_app(AppState::new(config.clone(), store)),
            config,
            calls,
        }
    }

    /// Number of store calls made so far
    pub fn store_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("token", token);
        }

        let body = body.map(|b| b.to_string()).unwrap_or_default();
        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// POST /users/sign_up with fixed names and [`TEST_PASSWORD`]
    pub async fn sign_up(&self, email: &str, phone: &str) -> TestResponse {
        self.request(
            "POST",
            "/users/sign_up",
            Some(json!({
                "first_name": "Grace",
                "last_name": "Hopper",
                "email": email,
                "phone": phone,
                "password": TEST_PASSWORD,
            })),
            None,
        )
        .await
    }

    /// Sign up and return `(session token, user_id)`
    pub async fn signed_up(&self, email: &str, phone: &str) -> (String, String) {
        let response = self.sign_up(email, phone).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        (
            response.data()["token"].as_str().unwrap().to_string(),
            response.data()["user"]["user_id"].as_str().unwrap().to_string(),
        )
    }

    /// POST a JSON body with a session token and return `data`,
    /// asserting the record was created
    pub async fn create(&self, path: &str, body: Value, token: &str) -> Value {
        let response = self.request("POST", path, Some(body), Some(token)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.data().clone()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of a success envelope
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `error` code of an error envelope
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
