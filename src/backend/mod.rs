//! Backend Module
//!
//! All server-side code for the AgriChat application: the Chat API, the
//! broadcast hub, and their supporting infrastructure.
//!
//! # Architecture
//!
//! - **`server`** - initialization, application state, configuration
//! - **`routes`** - route table assembly
//! - **`chat`** - message store, persistence, REST handlers
//! - **`hub`** - broadcast fan-out, presence, connection state machine
//! - **`auth`** - bearer-token verification (role claim)
//! - **`middleware`** - admin guard
//! - **`error`** - backend error types and HTTP conversion
//!
//! # State Management
//!
//! Handlers share `AppState` (store, hub, presence tracker, optional
//! database pool); every piece is internally synchronized and cheap to
//! clone. The hub serializes fan-out through one broadcast channel, so
//! all connected clients observe the same relative event order.

/// Bearer-token verification
pub mod auth;

/// Message store, persistence, REST handlers
pub mod chat;

/// Backend error types
pub mod error;

/// Broadcast hub and presence
pub mod hub;

/// Request middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server initialization and state
pub mod server;
