//! Table handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use restaurant_entity::Table;

use crate::dto::request::{CreateTableRequest, UpdateTableRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /tables
pub async fn list_tables(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Table>>>, ApiError> {
    let tables = state.tables.list().await?;
    Ok(Json(ApiResponse::ok(tables)))
}

/// GET /tables/{table_id}
pub async fn get_table(
    State(state): State<AppState>,
    Path(table_id): Path<String>,
) -> Result<Json<ApiResponse<Table>>, ApiError> {
    let table = state.tables.get(&table_id).await?;
    Ok(Json(ApiResponse::ok(table)))
}

/// POST /tables
pub async fn create_table(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTableRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Table>>), ApiError> {
    let table = state.tables.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(table))))
}

/// PATCH /tables/{table_id}
pub async fn update_table(
    State(state): State<AppState>,
    Path(table_id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateTableRequest>,
) -> Result<Json<ApiResponse<Table>>, ApiError> {
    let table = state.tables.update(&table_id, req.into()).await?;
    Ok(Json(ApiResponse::ok(table)))
}
