//! Account and user handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use restaurant_core::types::Slice;

use crate::dto::request::{LoginRequest, RefreshRequest, SignupRequest, UpdateProfileRequest};
use crate::dto::response::{ApiResponse, AuthResponse, TokenResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// POST /users/sign_up
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ApiError> {
    let session = state.accounts.signup(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(session.into()))))
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let session = state.accounts.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(session.into())))
}

/// POST /users/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let tokens = state.accounts.refresh(&req.refresh_token).await?;
    Ok(Json(ApiResponse::ok(tokens.into())))
}

/// GET /users?recordPerPage=&page=&startIndex=
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<Slice<UserResponse>>>, ApiError> {
    let page = state.users.list(&params.to_page_request()).await?;
    Ok(Json(ApiResponse::ok(page.map(UserResponse::from))))
}

/// GET /users/me
pub async fn me(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.users.me(&ctx).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.users.get(&user_id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PATCH /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(user_id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .users
        .update_profile(&ctx, &user_id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
