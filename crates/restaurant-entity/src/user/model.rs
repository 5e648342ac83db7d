//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::UserRole;
use crate::record::{NewIdentity, Record};

/// A registered restaurant staff account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// String form of `id`, used for lookups and embedded in tokens.
    pub user_id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address, unique across users.
    pub email: String,
    /// Phone number, unique across users.
    pub phone: String,
    /// Argon2 password digest. Never returned to clients.
    pub password_hash: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Account role.
    #[serde(default)]
    pub role: UserRole,
    /// Most recently issued session token.
    #[serde(default)]
    pub token: Option<String>,
    /// Most recently issued refresh token.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// When the user signed up.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for User {
    const COLLECTION: &'static str = "user";
    const KEY_FIELD: &'static str = "user_id";

    fn key(&self) -> &str {
        &self.user_id
    }

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Avatar image URL.
    pub avatar: Option<String>,
}

impl CreateUser {
    /// Build the stored record with a freshly generated identity.
    pub fn into_user(self, identity: NewIdentity) -> User {
        User {
            id: identity.id,
            user_id: identity.key,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            password_hash: self.password_hash,
            avatar: self.avatar,
            role: UserRole::default(),
            token: None,
            refresh_token: None,
            created_at: identity.now,
            updated_at: identity.now,
        }
    }
}
