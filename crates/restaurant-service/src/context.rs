//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use restaurant_auth::Claims;

/// Context for the current authenticated request.
///
/// Built from the validated claims so that every operation knows who is
/// acting without re-reading the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's `user_id`.
    pub user_id: String,
    /// Email from the token.
    pub email: String,
    /// Given name from the token.
    pub first_name: String,
    /// Family name from the token.
    pub last_name: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Whether the context belongs to the given user.
    pub fn is_user(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

impl From<&Claims> for RequestContext {
    fn from(claims: &Claims) -> Self {
        Self {
            user_id: claims.uid.clone(),
            email: claims.email.clone(),
            first_name: claims.first_name.clone(),
            last_name: claims.last_name.clone(),
            request_time: Utc::now(),
        }
    }
}
