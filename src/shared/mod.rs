//! Shared Types
//!
//! Types shared between the backend server and the client chat view:
//! the message record, the broadcast event vocabulary, and the error
//! types visible on both sides of the wire.
//!
//! # Module Structure
//!
//! ```text
//! shared/
//! ├── mod.rs     - Module exports
//! ├── message.rs - Message and Reaction records
//! ├── event.rs   - ChatEvent wire vocabulary
//! └── error.rs   - SharedError, content validation
//! ```

/// Message and reaction data structures
pub mod message;

/// Broadcast event vocabulary
pub mod event;

/// Shared error types
pub mod error;

// Re-export commonly used types
pub use error::SharedError;
pub use event::ChatEvent;
pub use message::{Message, Reaction};
