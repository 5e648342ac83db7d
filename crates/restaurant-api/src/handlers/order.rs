//! Order handlers. Orders reference a table that must exist.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use restaurant_entity::Order;

use crate::dto::request::{CreateOrderRequest, UpdateOrderRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Order>>>, ApiError> {
    let orders = state.orders.list().await?;
    Ok(Json(ApiResponse::ok(orders)))
}

/// GET /orders/{order_id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse<Order>>, ApiError> {
    let order = state.orders.get(&order_id).await?;
    Ok(Json(ApiResponse::ok(order)))
}

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Order>>), ApiError> {
    let order = state.orders.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(order))))
}

/// PATCH /orders/{order_id}
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateOrderRequest>,
) -> Result<Json<ApiResponse<Order>>, ApiError> {
    let order = state.orders.update(&order_id, req.into()).await?;
    Ok(Json(ApiResponse::ok(order)))
}
