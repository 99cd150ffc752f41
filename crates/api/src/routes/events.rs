//! Event endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use domain::models::event::{CreateEventRequest, ListEventsResponse};
use domain::services::CreatedResponse;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::record_created;

/// List events, earliest date first.
///
/// GET /api/v1/events
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<ListEventsResponse>, ApiError> {
    let events = state.store.list_events().await?;
    let total = events.len();
    Ok(Json(ListEventsResponse { events, total }))
}

/// Create an event.
///
/// POST /api/v1/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    request.validate()?;

    let id = state.store.create_event(request).await?;
    record_created("events");
    info!(event_id = %id, "Event created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
