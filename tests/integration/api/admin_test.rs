//! Admin route integration tests
//!
//! The bulk-clear endpoint sits behind the JWT middleware: missing or
//! invalid credentials get 401, a valid non-admin token gets 403, and
//! an admin token clears the store and announces the clear on the hub.

use assert_matches::assert_matches;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use agrichat::backend::hub::SYSTEM_ORIGIN;
use agrichat::shared::ChatEvent;

use crate::common::{admin_token, bearer, body_json, seed_message, test_app, user_token};

fn clear_request(auth: Option<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("DELETE")
        .uri("/api/messages/admin/clear");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_clear_without_token_returns_401() {
    let (app, state) = test_app();
    seed_message(&state, "alice", "still here").await;

    let response = app.oneshot(clear_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["status"], 401);
    assert_eq!(state.store.len().await, 1);
}

#[tokio::test]
async fn test_clear_with_malformed_header_returns_401() {
    let (app, _state) = test_app();

    let response = app
        .oneshot(clear_request(Some("Token abc".to_string())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_clear_with_user_role_returns_403() {
    let (app, state) = test_app();
    seed_message(&state, "alice", "still here").await;

    let response = app
        .oneshot(clear_request(Some(bearer(&user_token()))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["status"], 403);
    assert_eq!(state.store.len().await, 1);
}

#[tokio::test]
async fn test_clear_with_admin_role_empties_store_and_announces() {
    let (app, state) = test_app();
    seed_message(&state, "alice", "one").await;
    seed_message(&state, "bob", "two").await;

    // Subscribe before the request so the announcement is captured
    let mut rx = state.hub.subscribe();

    let response = app
        .oneshot(clear_request(Some(bearer(&admin_token()))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(state.store.is_empty().await);

    // The clear is the one server-originated broadcast; every
    // connection (admin included) is told to drop its local list
    let envelope = rx.try_recv().unwrap();
    assert_eq!(envelope.origin, SYSTEM_ORIGIN);
    assert_matches!(envelope.event, ChatEvent::ClearAll);
}
