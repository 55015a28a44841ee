/**
 * Broadcast Fan-Out
 *
 * The hub's fan-out layer: a single `tokio::sync::broadcast` channel
 * shared by every connection. Each connection subscribes once and
 * filters locally; the hub itself is a pure relay and persists nothing.
 *
 * Events travel in envelopes tagged with the originating connection id,
 * which is what lets typing notices skip their sender while everything
 * else — including a sender's own `messageSent` — is self-delivered, so
 * all clients converge through a single reconciliation code path.
 *
 * Slow receivers that fall behind skip events (`RecvError::Lagged`); a
 * later full reload of `GET /api/messages` reconciles anything missed.
 */
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::shared::ChatEvent;

/// Capacity of the broadcast channel
const BROADCAST_CAPACITY: usize = 1024;

/// Origin id used for hub-initiated events (e.g. the admin clear)
///
/// The nil UUID never collides with a real connection id, so system
/// envelopes are deliverable to every connection.
pub const SYSTEM_ORIGIN: Uuid = Uuid::nil();

/// An event together with the connection that originated it
#[derive(Debug, Clone)]
pub struct Envelope {
    /// Connection id of the originator (`SYSTEM_ORIGIN` for the server)
    pub origin: Uuid,
    /// The event being fanned out
    pub event: ChatEvent,
}

impl Envelope {
    /// Whether this envelope should be delivered to the given connection
    ///
    /// Typing notices are the only events excluded from their own
    /// originator; every other event is delivered to all connections,
    /// sender included.
    pub fn deliverable_to(&self, connection_id: Uuid) -> bool {
        match self.event {
            ChatEvent::Typing { .. } => self.origin != connection_id,
            _ => true,
        }
    }
}

/// The broadcast hub. Cloneable — stored in `AppState`.
#[derive(Clone)]
pub struct ChatHub {
    sender: broadcast::Sender<Envelope>,
}

impl Default for ChatHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatHub {
    /// Create a hub with the default channel capacity
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { sender }
    }

    /// Subscribe to the fan-out. Each connection calls this once.
    pub fn subscribe(&self) -> broadcast::Receiver<Envelope> {
        self.sender.subscribe()
    }

    /// Fan an event out to every subscribed connection
    ///
    /// Returns the number of subscribers that received the envelope.
    /// Sending with no subscribers is not an error.
    pub fn dispatch(&self, origin: Uuid, event: ChatEvent) -> usize {
        let name = event.name();
        match self.sender.send(Envelope { origin, event }) {
            Ok(subscriber_count) => {
                tracing::debug!(
                    "[Hub] Event {} fanned out to {} subscribers",
                    name,
                    subscriber_count
                );
                subscriber_count
            }
            Err(_) => {
                // No subscribers right now
                tracing::debug!("[Hub] Event {} had no subscribers", name);
                0
            }
        }
    }

    /// Fan out a hub-initiated event (no originating connection)
    pub fn dispatch_system(&self, event: ChatEvent) -> usize {
        self.dispatch(SYSTEM_ORIGIN, event)
    }

    /// Number of live subscribers (for logging and tests)
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
