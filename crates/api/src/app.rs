use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::services::RecordStore;

use crate::config::Config;
use crate::error::ApiError;
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id, SecurityHeaders,
};
use crate::routes::{donations, events, health, members, quotations, site, songs};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub config: Arc<Config>,
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.security.cors_origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

async fn not_found() -> ApiError {
    ApiError::NotFound("No such route".to_string())
}

pub fn create_app(config: Config, store: Arc<dyn RecordStore>) -> Router {
    let config = Arc::new(config);
    let security_headers = SecurityHeaders {
        hsts_enabled: config.security.hsts_enabled,
    };
    let state = AppState {
        store,
        config: config.clone(),
    };

    let record_routes = Router::new()
        .route("/api/v1/events", get(events::list_events).post(events::create_event))
        .route("/api/v1/songs", get(songs::list_songs).post(songs::create_song))
        .route(
            "/api/v1/members",
            get(members::list_members).post(members::create_member),
        )
        .route(
            "/api/v1/quotations",
            get(quotations::list_quotations).post(quotations::create_quotation),
        )
        .route("/api/v1/donations", post(donations::create_donation))
        .route("/api/v1/site", get(site::get_site_content));

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(record_routes)
        .fallback(not_found)
        // Global middleware (bottom layers run first)
        .layer(middleware::from_fn_with_state(
            security_headers,
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors_layer(&config))
        .with_state(state)
}
