//! Request Middleware
//!
//! Middleware for protecting privileged routes. Currently only the admin
//! guard used by the bulk clear endpoint.

/// Bearer-token admin guard
pub mod auth;

// Re-export commonly used items
pub use auth::{admin_middleware, AuthenticatedUser};
