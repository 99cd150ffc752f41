//! Landing page content with sample fallback.

use axum::{extract::State, Json};
use chrono::Utc;

use domain::services::{load_site_content, SiteContent};

use crate::app::AppState;
use crate::error::ApiError;

/// Members, songs, events and the upcoming subset, each from the live store
/// or the built-in sample set.
///
/// GET /api/v1/site
pub async fn get_site_content(
    State(state): State<AppState>,
) -> Result<Json<SiteContent>, ApiError> {
    let options = state.config.content.options();
    let today = Utc::now().date_naive();
    let content = load_site_content(state.store.as_ref(), &options, today).await?;
    Ok(Json(content))
}
