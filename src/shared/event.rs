/**
 * Broadcast Event Vocabulary
 *
 * This module defines the event types carried over the real-time channel
 * between chat clients and the broadcast hub.
 *
 * # Two-Phase Send
 *
 * Durable mutations follow persist-then-announce: a client first writes via
 * the REST API, then announces the server-confirmed record over the hub.
 * The hub rebroadcasts announcements verbatim; it never persists or
 * validates them. Transient events (typing, presence) skip the REST leg
 * entirely.
 *
 * # Wire Format
 *
 * Events are serialized as internally tagged JSON:
 *
 * ```json
 * {"event":"typing","username":"alice"}
 * {"event":"messageDeleted","id":"..."}
 * ```
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::message::Message;

/// A single event on the real-time channel
///
/// One enum covers both directions. Client-originated events are relayed
/// to every connected client (typing excepted, which skips the
/// originator); `UsersOnline` and `ClearAll` are emitted by the server
/// side itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ChatEvent {
    /// Client registers its display name for presence counting
    #[serde(rename_all = "camelCase")]
    Online { username: String },
    /// A freshly persisted message, announced by its sender
    #[serde(rename_all = "camelCase")]
    MessageSent { message: Message },
    /// A persisted edit; clients replace the matching id in place
    #[serde(rename_all = "camelCase")]
    MessageEdited { message: Message },
    /// A persisted delete; clients drop the matching id
    #[serde(rename_all = "camelCase")]
    MessageDeleted { id: Uuid },
    /// Transient typing notice, delivered to everyone except the sender
    #[serde(rename_all = "camelCase")]
    Typing { username: String },
    /// A reaction tuple appended to a message
    #[serde(rename_all = "camelCase")]
    ReactionAdded {
        message_id: Uuid,
        emoji: String,
        username: String,
    },
    /// Updated presence count, emitted on every register/disconnect
    #[serde(rename_all = "camelCase")]
    UsersOnline { count: usize },
    /// Admin cleared the store; clients empty their local lists
    ClearAll,
}

impl ChatEvent {
    /// Event name as it appears in the wire tag, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Online { .. } => "online",
            Self::MessageSent { .. } => "messageSent",
            Self::MessageEdited { .. } => "messageEdited",
            Self::MessageDeleted { .. } => "messageDeleted",
            Self::Typing { .. } => "typing",
            Self::ReactionAdded { .. } => "reactionAdded",
            Self::UsersOnline { .. } => "usersOnline",
            Self::ClearAll => "clearAll",
        }
    }
}
