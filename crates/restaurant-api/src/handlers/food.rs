//! Food handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use restaurant_entity::Food;

use crate::dto::request::{CreateFoodRequest, UpdateFoodRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /foods
pub async fn list_foods(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Food>>>, ApiError> {
    let foods = state.foods.list().await?;
    Ok(Json(ApiResponse::ok(foods)))
}

/// GET /foods/{food_id}
pub async fn get_food(
    State(state): State<AppState>,
    Path(food_id): Path<String>,
) -> Result<Json<ApiResponse<Food>>, ApiError> {
    let food = state.foods.get(&food_id).await?;
    Ok(Json(ApiResponse::ok(food)))
}

/// POST /foods
///
/// The menu must exist; the price is stored rounded to cents.
pub async fn create_food(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFoodRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Food>>), ApiError> {
    let food = state.foods.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(food))))
}

/// PATCH /foods/{food_id}
pub async fn update_food(
    State(state): State<AppState>,
    Path(food_id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateFoodRequest>,
) -> Result<Json<ApiResponse<Food>>, ApiError> {
    let food = state.foods.update(&food_id, req.into()).await?;
    Ok(Json(ApiResponse::ok(food)))
}
