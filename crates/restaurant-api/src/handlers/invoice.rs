//! Invoice handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use restaurant_entity::Invoice;
use restaurant_service::InvoiceView;

use crate::dto::request::{CreateInvoiceRequest, UpdateInvoiceRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// GET /invoices
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Invoice>>>, ApiError> {
    let invoices = state.invoices.list().await?;
    Ok(Json(ApiResponse::ok(invoices)))
}

/// GET /invoices/{invoice_id}
///
/// Returns the invoice joined with its order's table number, items and
/// amount due.
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<Json<ApiResponse<InvoiceView>>, ApiError> {
    let view = state.invoices.view(&invoice_id).await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// POST /invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Invoice>>), ApiError> {
    let invoice = state.invoices.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(invoice))))
}

/// PATCH /invoices/{invoice_id}
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateInvoiceRequest>,
) -> Result<Json<ApiResponse<Invoice>>, ApiError> {
    let invoice = state.invoices.update(&invoice_id, req.into()).await?;
    Ok(Json(ApiResponse::ok(invoice)))
}
