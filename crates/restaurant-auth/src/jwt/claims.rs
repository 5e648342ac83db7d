//! Claims embedded in session and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use restaurant_entity::User;

/// Identity payload carried by every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the authenticated user.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// The user's `user_id`.
    pub uid: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token type: "session" or "refresh".
    pub token_type: TokenType,
}

/// Distinguishes session tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Token sent in the `token` header on protected requests.
    Session,
    /// Long-lived token exchanged for a new pair.
    Refresh,
}

impl TokenType {
    /// Lowercase name of the token type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::Refresh => "refresh",
        }
    }
}

/// The identity fields a token pair is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// The user's `user_id`.
    pub uid: String,
}

impl From<&User> for TokenSubject {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            uid: user.user_id.clone(),
        }
    }
}

impl From<&Claims> for TokenSubject {
    fn from(claims: &Claims) -> Self {
        Self {
            email: claims.email.clone(),
            first_name: claims.first_name.clone(),
            last_name: claims.last_name.clone(),
            uid: claims.uid.clone(),
        }
    }
}

impl Claims {
    /// Returns the user id from the `uid` claim.
    pub fn user_id(&self) -> &str {
        &self.uid
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
