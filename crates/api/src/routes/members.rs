//! Member endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use domain::models::member::{CreateMemberRequest, ListMembersResponse};
use domain::services::CreatedResponse;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::record_created;

/// GET /api/v1/members
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<ListMembersResponse>, ApiError> {
    let members = state.store.list_members().await?;
    let total = members.len();
    Ok(Json(ListMembersResponse { members, total }))
}

/// POST /api/v1/members
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    request.validate()?;

    let id = state.store.create_member(request).await?;
    record_created("members");
    info!(member_id = %id, "Member created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
