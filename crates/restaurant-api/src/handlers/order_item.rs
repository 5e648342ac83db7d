//! Order item handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use restaurant_entity::OrderItem;

use crate::dto::request::{CreateOrderItemRequest, UpdateOrderItemRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /order_items
pub async fn list_order_items(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<OrderItem>>>, ApiError> {
    let items = state.order_items.list().await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /order_items/order/{order_id}
pub async fn items_by_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<OrderItem>>>, ApiError> {
    let items = state.order_items.items_by_order(&order_id).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /order_items/{order_item_id}
pub async fn get_order_item(
    State(state): State<AppState>,
    Path(order_item_id): Path<String>,
) -> Result<Json<ApiResponse<OrderItem>>, ApiError> {
    let item = state.order_items.get(&order_item_id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /order_items
///
/// Prices the item at the food's current price.
pub async fn create_order_item(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateOrderItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OrderItem>>), ApiError> {
    let item = state.order_items.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// PATCH /order_items/{order_item_id}
pub async fn update_order_item(
    State(state): State<AppState>,
    Path(order_item_id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateOrderItemRequest>,
) -> Result<Json<ApiResponse<OrderItem>>, ApiError> {
    let item = state
        .order_items
        .update(&order_item_id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(item)))
}
