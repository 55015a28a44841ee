//! Shared Error Types
//!
//! Error types used by both the backend and the client view. These cover
//! the failure cases that can occur on either side of the wire:
//! serialization problems and payload validation.
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across
//! thread boundaries.
use thiserror::Error;

/// Errors that can occur on either side of the chat wire
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Payload validation error (e.g. empty message content)
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate message content before it reaches the store
///
/// Empty or whitespace-only content is rejected with no durable or
/// broadcast effect; the caller surfaces the failure to the user.
pub fn validate_content(content: &str) -> Result<(), SharedError> {
    if content.trim().is_empty() {
        return Err(SharedError::validation(
            "content",
            "Message content cannot be empty",
        ));
    }
    Ok(())
}
