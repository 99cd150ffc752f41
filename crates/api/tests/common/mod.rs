//! Common test utilities for integration tests.
//!
//! The router is exercised against the in-memory record store, so these
//! tests need no database.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use std::sync::Arc;

use domain::services::InMemoryRecordStore;
use light_acapella_api::{
    app::create_app,
    config::{Config, ContentConfig, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig},
};

/// Test configuration with the sample fallback enabled.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Use random port
            request_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 10,
            idle_timeout_secs: 600,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig::default(),
        content: ContentConfig::default(),
    }
}

/// Create a test application over a fresh in-memory store.
pub fn create_test_app(config: Config) -> Router {
    create_test_app_with_store(config).0
}

/// Create a test application and hand back its store for inspection.
pub fn create_test_app_with_store(config: Config) -> (Router, Arc<InMemoryRecordStore>) {
    let store = Arc::new(InMemoryRecordStore::new());
    let app = create_app(config, store.clone());
    (app, store)
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// A complete event body.
pub fn event_body(title: &str, date: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "date": date,
        "time": "6:00 PM",
        "location": "Nairobi",
        "type": "Concert",
        "status": "upcoming"
    })
}

/// A complete quotation body.
pub fn quotation_body(full_name: &str) -> serde_json::Value {
    serde_json::json!({
        "fullName": full_name,
        "phone": "0712345678",
        "email": "client@example.com",
        "eventType": "Wedding",
        "eventDate": "2025-06-01",
        "location": "Nairobi",
        "amplificationNeeded": false
    })
}
