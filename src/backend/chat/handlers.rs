/**
 * Chat API Handlers
 *
 * REST handlers backing the message store:
 *
 * - `GET    /api/messages`             - full chronological list
 * - `POST   /api/messages`             - create (validated)
 * - `PUT    /api/messages/{id}`        - edit content, sets edited=true
 * - `DELETE /api/messages/{id}`        - hard delete
 * - `DELETE /api/messages/admin/clear` - privileged bulk clear
 *
 * # Two-Phase Send
 *
 * None of the per-message mutation handlers broadcast. Clients persist
 * here first and then announce the returned record over the hub, so a
 * failed write never produces phantom state on peers. The one exception
 * is the admin clear: its REST caller is also the announcing party, so
 * the handler emits `clearAll` itself after emptying the store.
 *
 * # Persistence
 *
 * When a database pool is configured, mutations are written through
 * after the in-memory store (the authoritative list for the running
 * process) has accepted them. Database failures are logged and do not
 * fail the request.
 */
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use uuid::Uuid;

use crate::backend::chat::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthenticatedUser;
use crate::backend::server::state::AppState;
use crate::shared::error::validate_content;
use crate::shared::{ChatEvent, Message};

/// Request body for `POST /api/messages`
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    /// Author's display name
    pub sender: String,
    /// Message text
    pub content: String,
    /// Optional id of the message being replied to
    #[serde(default)]
    pub reply_to: Option<Uuid>,
}

/// Request body for `PUT /api/messages/{id}`
#[derive(Debug, serde::Deserialize)]
pub struct UpdateMessageRequest {
    /// Replacement message text
    pub content: String,
}

/// Handle `GET /api/messages`
///
/// Returns all messages in chronological order (oldest first). This is
/// the initial-load and reconnect-reconciliation path for clients.
pub async fn list_messages(State(state): State<AppState>) -> Json<Vec<Message>> {
    let messages = state.store.list().await;
    tracing::debug!("[Chat] Listing {} messages", messages.len());
    Json(messages)
}

/// Handle `POST /api/messages`
///
/// Validates the content, appends the message to the store, writes it
/// through to the database when configured, and returns the persisted
/// record with its store-assigned id and timestamps. The sender
/// announces this record over the hub itself.
///
/// # Errors
///
/// * `400 Bad Request` - empty or whitespace-only content; nothing is
///   stored or broadcast
pub async fn create_message(
    State(state): State<AppState>,
    Json(request): Json<CreateMessageRequest>,
) -> Result<(StatusCode, Json<Message>), BackendError> {
    validate_content(&request.content)?;

    let message = state
        .store
        .create(request.sender, request.content, request.reply_to)
        .await;

    tracing::info!("[Chat] Message {} created by {}", message.id, message.sender);

    if let Some(pool) = &state.db_pool {
        if let Err(e) = db::save_message(pool, &message).await {
            tracing::warn!("[Chat] Failed to persist message {}: {:?}", message.id, e);
        }
    }

    Ok((StatusCode::CREATED, Json(message)))
}

/// Handle `PUT /api/messages/{id}`
///
/// Replaces the content of an existing message and marks it edited.
/// Returns the updated record for the sender to announce.
///
/// # Errors
///
/// * `404 Not Found` - no message with this id
/// * `400 Bad Request` - empty replacement content
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMessageRequest>,
) -> Result<Json<Message>, BackendError> {
    validate_content(&request.content)?;

    let message = state.store.update(id, request.content).await?;
    tracing::info!("[Chat] Message {} edited", id);

    if let Some(pool) = &state.db_pool {
        if let Err(e) = db::update_message(pool, &message).await {
            tracing::warn!("[Chat] Failed to persist edit of {}: {:?}", id, e);
        }
    }

    Ok(Json(message))
}

/// Handle `DELETE /api/messages/{id}`
///
/// Hard-deletes the message. Replies pointing at the removed id are left
/// dangling; clients render them without the quoted preview.
///
/// # Errors
///
/// * `404 Not Found` - no message with this id (including a repeated
///   delete); no broadcast side effect in that case
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    state.store.delete(id).await?;
    tracing::info!("[Chat] Message {} deleted", id);

    if let Some(pool) = &state.db_pool {
        if let Err(e) = db::delete_message(pool, id).await {
            tracing::warn!("[Chat] Failed to persist delete of {}: {:?}", id, e);
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Handle `DELETE /api/messages/admin/clear`
///
/// Empties the store and instructs the hub to emit `clearAll` so every
/// connected client empties its local list. The route is wrapped in the
/// admin guard middleware; by the time this handler runs the caller's
/// role claim has been verified and the caller is in request extensions.
pub async fn clear_messages(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedUser>,
) -> Result<StatusCode, BackendError> {
    state.store.delete_all().await;
    tracing::warn!("[Chat] All messages cleared by admin {}", admin.username);

    if let Some(pool) = &state.db_pool {
        if let Err(e) = db::clear_messages(pool).await {
            tracing::warn!("[Chat] Failed to persist clear: {:?}", e);
        }
    }

    // The REST caller is the announcing party here: connected clients
    // learn about the clear through the hub, not through a reload.
    state.hub.dispatch_system(ChatEvent::ClearAll);

    Ok(StatusCode::NO_CONTENT)
}
