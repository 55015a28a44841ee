/**
 * Message Store
 *
 * In-memory message storage with create/update/delete/list operations.
 * The store is the authoritative message list for the running process;
 * when a database is configured, mutations are additionally written
 * through by the handlers (see `chat::db`) and the list is reloaded at
 * startup.
 *
 * # Ordering
 *
 * Messages are kept in arrival order, which is also chronological order
 * of `created_at` since ids and timestamps are assigned under the write
 * lock.
 *
 * # Side Effects
 *
 * The store never broadcasts. Announcing a mutation over the hub is the
 * caller's responsibility — this is what makes the persist-then-announce
 * protocol possible.
 */
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::{Message, Reaction};

/// Thread-safe, shareable message store
///
/// Cloning is cheap; all clones share the same underlying list behind
/// an `Arc<RwLock<..>>`: many concurrent readers or one writer.
#[derive(Clone, Default)]
pub struct MessageStore {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl MessageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire list, used when restoring persisted state at
    /// startup. Input is assumed to be in chronological order.
    pub async fn load(&self, messages: Vec<Message>) {
        *self.messages.write().await = messages;
    }

    /// List all messages, oldest first
    pub async fn list(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    /// Number of stored messages
    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.messages.read().await.is_empty()
    }

    /// Create and append a new message
    ///
    /// The id and timestamps are assigned inside the critical section,
    /// so list order and `created_at` order never disagree (a restart
    /// reloads by `created_at` and must reproduce the same list).
    pub async fn create(
        &self,
        sender: String,
        content: String,
        reply_to: Option<Uuid>,
    ) -> Message {
        let mut messages = self.messages.write().await;
        let message = Message::new(sender, content, reply_to);
        messages.push(message.clone());
        message
    }

    /// Update a message's content, marking it edited
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no message has the given id.
    pub async fn update(&self, id: Uuid, content: String) -> Result<Message, BackendError> {
        let mut messages = self.messages.write().await;
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| BackendError::not_found(id))?;
        message.content = content;
        message.edited = true;
        message.updated_at = chrono::Utc::now();
        Ok(message.clone())
    }

    /// Delete a message by id
    ///
    /// Deletion is a hard delete; replies pointing at the removed id are
    /// left dangling and resolved (to nothing) by the client view.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no message has the given id. A second delete
    /// of the same id reports `NotFound` without corrupting state.
    pub async fn delete(&self, id: Uuid) -> Result<(), BackendError> {
        let mut messages = self.messages.write().await;
        let before = messages.len();
        messages.retain(|m| m.id != id);
        if messages.len() == before {
            return Err(BackendError::not_found(id));
        }
        Ok(())
    }

    /// Remove every message (privileged bulk clear)
    pub async fn delete_all(&self) {
        self.messages.write().await.clear();
    }

    /// Append a reaction tuple to a message
    ///
    /// Reactions are additive only and kept in receipt order, so every
    /// client's aggregated view converges on the same sequence.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no message has the given id (e.g. a reaction
    /// raced with a delete; the event is then dropped).
    pub async fn add_reaction(
        &self,
        id: Uuid,
        emoji: String,
        username: String,
    ) -> Result<Message, BackendError> {
        let mut messages = self.messages.write().await;
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| BackendError::not_found(id))?;
        message.reactions.push(Reaction { emoji, username });
        message.updated_at = chrono::Utc::now();
        Ok(message.clone())
    }
}
