/**
 * Client Chat View State
 *
 * Headless reconciliation state for one chat client. The view holds the
 * local message list and keeps it convergent with the server through
 * exactly two inputs:
 *
 * 1. `set_messages` - the full list from `GET /api/messages`, used on
 *    mount and after a reconnect (`ConnectionLost` recovery: reconnect,
 *    re-announce presence, re-fetch, reconcile)
 * 2. `apply` - one hub event at a time, in arrival order
 *
 * The view never mutates a message without a server round trip; the
 * authoritative record always lives server-side and arrives here
 * through the single broadcast path, sender included.
 *
 * Rendering concerns that carry reconciliation semantics live here too:
 * day-bucket grouping ("Today" / "Yesterday" / literal date), one-level
 * reply resolution against the loaded list, reaction aggregation in
 * receipt order, and the 2-second typing auto-expiry.
 */
use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::shared::{ChatEvent, Message};

/// Quiet period in seconds after which a typing indicator auto-clears
pub const TYPING_EXPIRY_SECS: i64 = 2;

/// Local, server-synchronized chat state for one client
#[derive(Default)]
pub struct ChatView {
    messages: Vec<Message>,
    online_count: usize,
    /// `(username, last typing event)` pairs, insertion order
    typing: Vec<(String, DateTime<Utc>)>,
}

impl ChatView {
    /// Create an empty view (pre-fetch)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the local list with a fresh server fetch
    pub fn set_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    /// The local message list, chronological
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Current online-user count as last announced by the hub
    pub fn online_count(&self) -> usize {
        self.online_count
    }

    /// Apply one hub event to the local state
    ///
    /// `now` is injected so typing expiry stays deterministic in tests.
    /// Events referencing ids not in the loaded list (an edit, delete,
    /// or reaction that raced a clear or arrived before the fetch) are
    /// ignored rather than treated as errors.
    pub fn apply(&mut self, event: ChatEvent, now: DateTime<Utc>) {
        match event {
            ChatEvent::MessageSent { message } => {
                // Self-delivery means the sender's own announcement comes
                // through here too; an id already present (reconnect
                // overlap) is not appended twice.
                if !self.messages.iter().any(|m| m.id == message.id) {
                    self.typing.retain(|(name, _)| *name != message.sender);
                    self.messages.push(message);
                }
            }
            ChatEvent::MessageEdited { message } => {
                if let Some(existing) =
                    self.messages.iter_mut().find(|m| m.id == message.id)
                {
                    *existing = message;
                }
            }
            ChatEvent::MessageDeleted { id } => {
                self.messages.retain(|m| m.id != id);
            }
            ChatEvent::ReactionAdded {
                message_id,
                emoji,
                username,
            } => {
                if let Some(message) =
                    self.messages.iter_mut().find(|m| m.id == message_id)
                {
                    message.reactions.push(crate::shared::Reaction { emoji, username });
                }
            }
            ChatEvent::Typing { username } => {
                // A fresh event resets the 2-second window instead of
                // stacking a second indicator
                match self.typing.iter_mut().find(|(name, _)| *name == username) {
                    Some(entry) => entry.1 = now,
                    None => self.typing.push((username, now)),
                }
            }
            ChatEvent::UsersOnline { count } => {
                self.online_count = count;
            }
            ChatEvent::ClearAll => {
                self.messages.clear();
            }
            ChatEvent::Online { .. } => {
                // Consumed by the hub; never reaches a client
            }
        }
    }

    /// Users currently showing a typing indicator
    ///
    /// An indicator is live while the sender's last typing event is
    /// within [`TYPING_EXPIRY_SECS`] of `now`.
    pub fn typing_users(&self, now: DateTime<Utc>) -> Vec<&str> {
        let expiry = Duration::seconds(TYPING_EXPIRY_SECS);
        self.typing
            .iter()
            .filter(|(_, last)| now - *last < expiry)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Resolve a message's one-level reply link against the loaded list
    ///
    /// Returns `None` when the message is not a reply or when the
    /// referenced message has since been deleted; the caller renders
    /// without the quoted preview in both cases.
    pub fn resolve_reply(&self, message: &Message) -> Option<&Message> {
        let target = message.reply_to?;
        self.messages.iter().find(|m| m.id == target)
    }

    /// Group the list into calendar-day buckets, chronological
    ///
    /// Labels are "Today", "Yesterday", or the literal date. Messages
    /// are already chronological, so buckets come out as consecutive
    /// runs in list order.
    pub fn grouped(&self, today: NaiveDate) -> Vec<(String, Vec<&Message>)> {
        let mut buckets: Vec<(String, Vec<&Message>)> = Vec::new();
        for message in &self.messages {
            let label = day_label(message.created_at.date_naive(), today);
            match buckets.last_mut() {
                Some((last_label, bucket)) if *last_label == label => bucket.push(message),
                _ => buckets.push((label, vec![message])),
            }
        }
        buckets
    }
}

/// Day-bucket label for a message date relative to `today`
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.pred_opt() {
        "Yesterday".to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}
