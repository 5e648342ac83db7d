//! Menu handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use restaurant_entity::Menu;

use crate::dto::request::{CreateMenuRequest, UpdateMenuRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /menus
pub async fn list_menus(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Menu>>>, ApiError> {
    let menus = state.menus.list().await?;
    Ok(Json(ApiResponse::ok(menus)))
}

/// GET /menus/{menu_id}
pub async fn get_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
) -> Result<Json<ApiResponse<Menu>>, ApiError> {
    let menu = state.menus.get(&menu_id).await?;
    Ok(Json(ApiResponse::ok(menu)))
}

/// POST /menus
pub async fn create_menu(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateMenuRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Menu>>), ApiError> {
    let menu = state.menus.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(menu))))
}

/// PATCH /menus/{menu_id}
///
/// A new validity window must start in the future and end after it starts.
pub async fn update_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateMenuRequest>,
) -> Result<Json<ApiResponse<Menu>>, ApiError> {
    let menu = state.menus.update(&menu_id, req.into()).await?;
    Ok(Json(ApiResponse::ok(menu)))
}
