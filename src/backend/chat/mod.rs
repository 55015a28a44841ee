//! Chat Backend Module
//!
//! Server-side message handling: the in-memory message store, optional
//! database write-through, and the REST handlers of the Chat API.
//!
//! # Architecture
//!
//! - **`store`** - authoritative in-memory message list
//! - **`db`** - optional PostgreSQL persistence (write-through + restore)
//! - **`handlers`** - REST endpoints under `/api/messages`
//!
//! Broadcasting lives in the `hub` module; the store and its handlers
//! never fan out per-message mutations themselves (two-phase send).

/// In-memory message store
pub mod store;

/// Database operations for message persistence
pub mod db;

/// REST handlers for the Chat API
pub mod handlers;

// Re-export commonly used types
pub use store::MessageStore;
