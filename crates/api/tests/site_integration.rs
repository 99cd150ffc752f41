//! Integration tests for the landing page content endpoint.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_test_app, create_test_app_with_store, event_body, get_request, json_request,
    parse_response_body, test_config,
};
use tower::ServiceExt;

#[tokio::test]
async fn test_empty_store_serves_samples() {
    let app = create_test_app(test_config());

    let response = app.oneshot(get_request("/api/v1/site")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["members"].as_array().unwrap().len(), 6);
    assert_eq!(body["events"].as_array().unwrap().len(), 4);
    assert_eq!(body["songs"].as_array().unwrap().len(), 9);
    assert_eq!(body["source"]["members"], "sample");
    assert_eq!(body["source"]["songs"], "sample");
    assert_eq!(body["source"]["events"], "sample");
}

#[tokio::test]
async fn test_live_events_replace_samples_per_collection() {
    let app = create_test_app(test_config());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/events",
            event_body("Far Future Concert", "2999-12-31"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get_request("/api/v1/site")).await.unwrap();
    let body = parse_response_body(response).await;

    assert_eq!(body["source"]["events"], "live");
    assert_eq!(body["source"]["members"], "sample");
    assert_eq!(body["events"].as_array().unwrap().len(), 1);
    assert_eq!(body["upcomingEvents"][0]["title"], "Far Future Concert");
}

#[tokio::test]
async fn test_failing_store_falls_back_to_samples() {
    let (app, store) = create_test_app_with_store(test_config());
    store.set_failing(true);

    let response = app.oneshot(get_request("/api/v1/site")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["source"]["songs"], "sample");
}

#[tokio::test]
async fn test_fallback_disabled_surfaces_errors() {
    let mut config = test_config();
    config.content.sample_fallback = false;
    let (app, store) = create_test_app_with_store(config);

    let response = app.clone().oneshot(get_request("/api/v1/site")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert!(body["members"].as_array().unwrap().is_empty());
    assert_eq!(body["source"]["members"], "live");

    store.set_failing(true);
    let response = app.oneshot(get_request("/api/v1/site")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_upcoming_limit_applies() {
    let mut config = test_config();
    config.content.upcoming_limit = 2;
    let app = create_test_app(config);

    for (title, date) in [
        ("Third", "2999-03-01"),
        ("First", "2999-01-01"),
        ("Past", "2000-01-01"),
        ("Second", "2999-02-01"),
    ] {
        app.clone()
            .oneshot(json_request(Method::POST, "/api/v1/events", event_body(title, date)))
            .await
            .unwrap();
    }

    let response = app.oneshot(get_request("/api/v1/site")).await.unwrap();
    let body = parse_response_body(response).await;
    let upcoming: Vec<&str> = body["upcomingEvents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(upcoming, vec!["First", "Second"]);
    assert_eq!(body["events"].as_array().unwrap().len(), 4);
}
