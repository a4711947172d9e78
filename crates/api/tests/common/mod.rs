#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use campaignhub_api::config::ServerConfig;
use campaignhub_api::router::build_app_router;
use campaignhub_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and no snapshot file.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        snapshot_path: None,
    }
}

/// Full application router over freshly seeded state.
///
/// The router is `Clone` and clones share state, so a test can send several
/// requests with `app.clone()`.
pub fn build_test_app() -> Router {
    build_app_router(AppState::seeded(test_config()))
}

/// Same as [`build_test_app`] but over caller-provided state, so the test
/// can inspect registries directly afterwards.
pub fn build_test_app_with_state(state: AppState) -> Router {
    build_app_router(state)
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a campaign and return its id.
pub async fn create_campaign(app: &Router, name: &str) -> String {
    let response = post_json(
        app.clone(),
        "/api/v1/campaigns",
        serde_json::json!({
            "name": name,
            "objectives": { "primary": "awareness" },
        }),
    )
    .await;
    let json = body_json(response).await;
    json["data"]["id"].as_str().unwrap().to_string()
}
