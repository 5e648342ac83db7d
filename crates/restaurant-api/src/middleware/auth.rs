//! Token gate for protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use restaurant_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Request header carrying the session token.
pub const TOKEN_HEADER: &str = "token";

/// Validates the `token` header and stores the decoded claims in the
/// request extensions. The handler never runs when validation fails.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .ok_or_else(|| AppError::authentication("No authorization header provided"))?
        .to_str()
        .map_err(|_| AppError::authentication("Authorization header is not valid text"))?;

    let claims = state.tokens.validate(token).inspect_err(|e| {
        debug!(path = %request.uri().path(), error = %e, "Rejected token");
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
