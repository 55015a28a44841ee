//! Application fixtures
//!
//! Builds the full router over a fresh in-memory state (no database),
//! plus request/response helpers for driving it with `tower::oneshot`.

use agrichat::backend::routes::router::create_router;
use agrichat::backend::server::state::AppState;
use agrichat::shared::Message;
use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;

/// Build the application router over a fresh, database-less state
///
/// The state is returned alongside the router so tests can reach the
/// store, hub, and presence tracker directly.
pub fn test_app() -> (Router, AppState) {
    let state = AppState::new(None);
    let router = create_router(state.clone());
    (router, state)
}

/// Insert a message directly into the store, bypassing the HTTP layer
pub async fn seed_message(state: &AppState, sender: &str, content: &str) -> Message {
    state
        .store
        .create(sender.to_string(), content.to_string(), None)
        .await
}

/// Build a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}
