//! Backend Error Module
//!
//! Error types specific to the backend server and their conversion to
//! HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - BackendError definition and constructors
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! All backend errors implement `IntoResponse`, so handlers return
//! `Result<_, BackendError>` and let the conversion produce the JSON
//! error body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
