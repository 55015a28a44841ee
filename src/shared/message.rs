/**
 * Message Data Structure
 *
 * This module defines the Message struct used for chat messages and its
 * serialization for the REST API and the broadcast hub.
 *
 * The Message struct is shared between the backend and the client view,
 * allowing the exact server-confirmed record to flow through both the
 * initial `GET /api/messages` fetch and the live broadcast channel.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single emoji reaction attached to a message.
///
/// Reactions are additive only: each `(emoji, username)` occurrence is
/// appended in receipt order and never removed or deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reaction {
    /// The emoji symbol (e.g. "👍")
    pub emoji: String,
    /// Display name of the reacting user
    pub username: String,
}

/// Represents a single chat message
///
/// This structure is used both on the server (for storage and REST
/// responses) and on the client (for the local message list). The `id`
/// and the timestamps are assigned by the store and immutable; `content`
/// is the only field mutated by an edit.
///
/// # Fields
/// * `id` - Store-assigned unique identity
/// * `sender` - Author's display name (string identity, not a foreign key)
/// * `content` - The message text body
/// * `edited` - Set true on the first successful edit, never reset
/// * `reply_to` - Optional one-level reply link to another message's id
/// * `reactions` - Appended `(emoji, username)` pairs, receipt order
/// * `created_at` / `updated_at` - Store-assigned UTC timestamps
///
/// # Example
/// ```rust
/// use agrichat::shared::Message;
///
/// let message = Message::new("alice".to_string(), "Hello!".to_string(), None);
/// assert!(!message.edited);
/// assert!(message.reactions.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Store-assigned unique message id
    pub id: Uuid,
    /// The author's display name
    pub sender: String,
    /// The message text content
    pub content: String,
    /// Whether the content has ever been edited
    #[serde(default)]
    pub edited: bool,
    /// Optional id of the message this one replies to
    ///
    /// This is a one-level link, not a thread tree. The referenced message
    /// may have been deleted since; the client resolves the link against
    /// its currently loaded list and renders without a preview when the
    /// lookup fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Uuid>,
    /// Reactions received for this message, in receipt order
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    /// When the message was created (UTC)
    pub created_at: DateTime<Utc>,
    /// When the message was last mutated (UTC)
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message with a fresh id and the current timestamp
    ///
    /// This is the store's constructor for incoming sends. The id and the
    /// timestamps are assigned here; the caller supplies only the fields
    /// a client controls.
    ///
    /// # Arguments
    /// * `sender` - The author's display name
    /// * `content` - The message text
    /// * `reply_to` - Optional id of the message being replied to
    pub fn new(sender: String, content: String, reply_to: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            sender,
            content,
            edited: false,
            reply_to,
            reactions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
