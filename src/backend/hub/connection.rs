/**
 * Per-Connection State Machine
 *
 * Each hub connection is modelled as an explicit state machine instead
 * of ad-hoc event callbacks:
 *
 * ```text
 * Connected --online--> Registered --close--> Disconnected
 *     \___________________close_____________________/
 * ```
 *
 * The handlers here are functions of `(state, event)` producing the new
 * state and the events to fan out; the socket driver owns the I/O. This
 * keeps the fan-out decisions deterministic and unit-testable without a
 * live network stack.
 */
use uuid::Uuid;

use crate::backend::hub::presence::PresenceTracker;
use crate::shared::ChatEvent;

/// Lifecycle state of one hub connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Socket open, no presence announced yet
    Connected,
    /// Presence registered under a display name
    Registered {
        /// The announced display name
        username: String,
    },
    /// Socket closed; no further events are processed
    Disconnected,
}

/// Process one client-originated event
///
/// Returns the events to fan out to all connections. The presence
/// tracker is the only side effect and is injected by the driver.
///
/// # Behavior
///
/// * `Online` - registers (or re-registers) presence and announces the
///   updated count
/// * `Typing`, `MessageSent`, `MessageEdited`, `MessageDeleted`,
///   `ReactionAdded` - relayed verbatim; durability happened (or will
///   happen) outside the hub
/// * `UsersOnline`, `ClearAll` - server-originated vocabulary; a client
///   sending these is ignored
/// * any event on a `Disconnected` connection is ignored
pub fn handle_client_event(
    state: &mut ConnectionState,
    connection_id: Uuid,
    event: ChatEvent,
    presence: &PresenceTracker,
) -> Vec<ChatEvent> {
    if *state == ConnectionState::Disconnected {
        return Vec::new();
    }

    match event {
        ChatEvent::Online { username } => {
            presence.register(connection_id, username.clone());
            *state = ConnectionState::Registered { username };
            vec![ChatEvent::UsersOnline {
                count: presence.count(),
            }]
        }
        event @ (ChatEvent::Typing { .. }
        | ChatEvent::MessageSent { .. }
        | ChatEvent::MessageEdited { .. }
        | ChatEvent::MessageDeleted { .. }
        | ChatEvent::ReactionAdded { .. }) => vec![event],
        ChatEvent::UsersOnline { .. } | ChatEvent::ClearAll => {
            // Server-only vocabulary; not relayable by clients
            Vec::new()
        }
    }
}

/// Process the (implicit) disconnect of a connection
///
/// Removes the presence entry if one was registered and announces the
/// updated count. A connection that disconnects before registering
/// contributes nothing and its removal is a no-op.
pub fn handle_disconnect(
    state: &mut ConnectionState,
    connection_id: Uuid,
    presence: &PresenceTracker,
) -> Vec<ChatEvent> {
    let was_registered = matches!(state, ConnectionState::Registered { .. });
    *state = ConnectionState::Disconnected;

    if !was_registered {
        return Vec::new();
    }

    presence.unregister(connection_id);
    vec![ChatEvent::UsersOnline {
        count: presence.count(),
    }]
}
