//! Extractor for the authenticated caller.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use restaurant_auth::Claims;
use restaurant_core::error::AppError;
use restaurant_service::RequestContext;

use crate::error::ApiError;

/// The caller identity decoded by the token gate.
///
/// Only available on routes behind [`require_token`](crate::middleware::auth::require_token).
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .ok_or_else(|| AppError::authentication("Not authenticated"))?;
        Ok(Self(RequestContext::from(claims)))
    }
}
