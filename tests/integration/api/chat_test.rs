//! Chat API integration tests
//!
//! Drives the message endpoints through the full router with
//! `tower::oneshot`, asserting on status codes, JSON bodies, and the
//! resulting store contents.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::sync::broadcast::error::TryRecvError;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{body_json, empty_request, json_request, seed_message, test_app};

#[tokio::test]
async fn test_list_messages_starts_empty() {
    let (app, _state) = test_app();

    let response = app
        .oneshot(empty_request("GET", "/api/messages"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_message() {
    let (app, state) = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/messages",
            json!({"sender": "alice", "content": "fresh eggs for sale"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["sender"], "alice");
    assert_eq!(body["content"], "fresh eggs for sale");
    assert_eq!(body["edited"], false);
    assert_eq!(body["reactions"], json!([]));
    assert!(body["id"].as_str().unwrap().parse::<Uuid>().is_ok());

    // The store now holds the persisted record; broadcasting is the
    // client's second phase, so no hub event happened here
    assert_eq!(state.store.len().await, 1);
}

#[tokio::test]
async fn test_create_message_rejects_blank_content() {
    let (app, state) = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/messages",
            json!({"sender": "alice", "content": "   "}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().len() > 0);
    assert!(state.store.is_empty().await);
}

#[tokio::test]
async fn test_create_reply_carries_reply_to() {
    let (app, state) = test_app();
    let original = seed_message(&state, "alice", "anyone selling hay?").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/messages",
            json!({
                "sender": "bob",
                "content": "I have ten bales",
                "replyTo": original.id,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["replyTo"], json!(original.id));
}

#[tokio::test]
async fn test_messages_listed_in_creation_order() {
    let (app, state) = test_app();
    seed_message(&state, "alice", "first").await;
    seed_message(&state, "bob", "second").await;
    seed_message(&state, "alice", "third").await;

    let response = app
        .oneshot(empty_request("GET", "/api/messages"))
        .await
        .unwrap();

    let body = body_json(response).await;
    let contents: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_update_message() {
    let (app, state) = test_app();
    let first = seed_message(&state, "alice", "one").await;
    let second = seed_message(&state, "bob", "two").await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/messages/{}", first.id),
            json!({"content": "one, edited"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["content"], "one, edited");
    assert_eq!(body["edited"], true);

    // The edit keeps the message at its original list position
    let messages = state.store.list().await;
    assert_eq!(messages[0].id, first.id);
    assert_eq!(messages[1].id, second.id);
}

#[tokio::test]
async fn test_update_unknown_message_returns_404() {
    let (app, _state) = test_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/messages/{}", Uuid::new_v4()),
            json!({"content": "ghost"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_update_rejects_blank_content() {
    let (app, state) = test_app();
    let message = seed_message(&state, "alice", "keep me").await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/messages/{}", message.id),
            json!({"content": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.store.list().await[0].content, "keep me");
}

#[tokio::test]
async fn test_delete_message() {
    let (app, state) = test_app();
    let message = seed_message(&state, "alice", "going, going").await;

    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/messages/{}", message.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(state.store.is_empty().await);

    // A repeat delete finds nothing and puts nothing on the hub
    let mut rx = state.hub.subscribe();
    let response = app
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/messages/{}", message.id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_matches!(rx.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_deleting_reply_target_leaves_reply_intact() {
    let (app, state) = test_app();
    let original = seed_message(&state, "alice", "question").await;
    let reply = state
        .store
        .create("bob".to_string(), "answer".to_string(), Some(original.id))
        .await;

    let response = app
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/messages/{}", original.id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The reply survives with its (now dangling) link untouched
    let messages = state.store.list().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, reply.id);
    assert_eq!(messages[0].reply_to, Some(original.id));
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (app, _state) = test_app();

    let response = app
        .oneshot(empty_request("GET", "/api/nope"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
