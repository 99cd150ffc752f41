//! Donation endpoint handler.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use domain::models::donation::CreateDonationRequest;
use domain::services::CreatedResponse;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::record_created;

/// Record a pledge with status `pending`. No payment is initiated here.
///
/// POST /api/v1/donations
pub async fn create_donation(
    State(state): State<AppState>,
    Json(request): Json<CreateDonationRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    request.validate()?;

    let amount = request.amount;
    let id = state.store.create_donation(request).await?;
    record_created("donations");
    info!(donation_id = %id, amount, "Donation pledged");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
