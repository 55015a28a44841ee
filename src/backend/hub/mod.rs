//! Broadcast Hub Module
//!
//! The real-time fan-out relay connecting all active chat clients, plus
//! the presence registry it announces from.
//!
//! # Architecture
//!
//! - **`broadcast`** - single-process fan-out over one tokio broadcast
//!   channel, with origin-tagged envelopes
//! - **`presence`** - owned `(connection id -> display name)` registry
//! - **`connection`** - per-connection state machine
//!   `{Connected, Registered, Disconnected}` with pure event handlers
//! - **`socket`** - WebSocket driver wiring the pieces together
//!
//! # Ordering
//!
//! The broadcast channel serializes dispatch, so every client observes
//! the same relative event order; no ordering stronger than hub arrival
//! order is promised across different senders.
//!
//! # Durability
//!
//! The hub is a relay: durable mutations are persisted through the Chat
//! API before their announcement arrives here (two-phase send). The one
//! durable side effect at the hub boundary — appending reactions — is
//! done by the socket driver, not by the fan-out layer.

/// Fan-out channel and envelopes
pub mod broadcast;

/// Per-connection state machine
pub mod connection;

/// Presence registry
pub mod presence;

/// WebSocket connection driver
pub mod socket;

// Re-export commonly used types
pub use broadcast::{ChatHub, Envelope, SYSTEM_ORIGIN};
pub use connection::{handle_client_event, handle_disconnect, ConnectionState};
pub use presence::PresenceTracker;
