//! User repository implementation.

use restaurant_core::result::AppResult;
use restaurant_core::types::{DocumentPatch, Filter, InsertOutcome, PageRequest, Slice};
use restaurant_entity::User;

use super::record::RecordRepository;
use crate::store::StoreManager;

/// Repository for user lookups, uniqueness checks and token persistence.
#[derive(Debug, Clone)]
pub struct UserRepository {
    records: RecordRepository<User>,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(store: StoreManager) -> Self {
        Self {
            records: RecordRepository::new(store),
        }
    }

    /// Find a user by `user_id`, failing with not-found.
    pub async fn get(&self, user_id: &str) -> AppResult<User> {
        self.records.get(user_id).await
    }

    /// Find a user by exact email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.records.find_one_by(&Filter::eq("email", email)).await
    }

    /// Number of users registered with this email.
    pub async fn count_by_email(&self, email: &str) -> AppResult<u64> {
        self.records.count_by(&Filter::eq("email", email)).await
    }

    /// Number of users registered with this phone.
    pub async fn count_by_phone(&self, phone: &str) -> AppResult<u64> {
        self.records.count_by(&Filter::eq("phone", phone)).await
    }

    /// List users with pagination.
    pub async fn find_page(&self, page: &PageRequest) -> AppResult<Slice<User>> {
        self.records.find_page(&Filter::all(), page).await
    }

    /// Insert a new user.
    pub async fn create(&self, user: &User) -> AppResult<InsertOutcome> {
        self.records.insert(user).await
    }

    /// Apply a profile patch.
    pub async fn update(&self, user_id: &str, patch: DocumentPatch) -> AppResult<User> {
        self.records.update(user_id, patch).await
    }

    /// Overwrite the stored session and refresh tokens.
    pub async fn update_tokens(
        &self,
        user_id: &str,
        token: &str,
        refresh_token: &str,
    ) -> AppResult<User> {
        let patch = DocumentPatch::new()
            .set("token", token)?
            .set("refresh_token", refresh_token)?;
        self.records.update(user_id, patch).await
    }
}
