//! Quotation request endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use domain::models::quotation::{CreateQuotationRequest, ListQuotationsResponse};
use domain::services::CreatedResponse;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::record_created;

/// List quotation requests, newest first.
///
/// GET /api/v1/quotations
pub async fn list_quotations(
    State(state): State<AppState>,
) -> Result<Json<ListQuotationsResponse>, ApiError> {
    let quotations = state.store.list_quotations().await?;
    let total = quotations.len();
    Ok(Json(ListQuotationsResponse { quotations, total }))
}

/// Submit a quotation request. Stored with status `pending`.
///
/// POST /api/v1/quotations
pub async fn create_quotation(
    State(state): State<AppState>,
    Json(request): Json<CreateQuotationRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    request.validate()?;

    let event_type = request.event_type.clone();
    let id = state.store.create_quotation(request).await?;
    record_created("quotations");
    info!(quotation_id = %id, event_type = %event_type, "Quotation request received");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
