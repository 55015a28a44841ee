//! AgriChat - Main Library
//!
//! AgriChat is a real-time chat service for a farm marketplace, built on
//! Axum with WebSocket fan-out and an optional PostgreSQL persistence
//! layer.
//!
//! # Overview
//!
//! This library provides the core functionality for AgriChat, including:
//! - A persisted message store with edit, delete, reply, and reaction
//!   semantics
//! - A broadcast hub relaying chat events to every connected client
//! - Presence tracking and typing indicators
//! - JWT-backed admin operations (clear all messages)
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between client and backend
//!   - Message and reaction structures
//!   - The chat event vocabulary carried over the wire
//!   - Content validation and error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with REST message handlers
//!   - WebSocket hub with presence and typing relay
//!   - Admin authentication middleware
//!   - Optional database write-through and startup restore
//!
//! - **`client`** - UI-agnostic client state
//!   - Message list reconciliation from the event stream
//!   - Day grouping, reply resolution, typing expiry
//!
//! # Usage
//!
//! ```rust,no_run
//! use agrichat::backend::server::init::create_app;
//!
//! # async fn example() {
//! let (app, _state) = create_app().await;
//! // Serve `app` with Axum
//! # }
//! ```

pub mod backend;
pub mod client;
pub mod shared;
