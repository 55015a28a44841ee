/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP
 * responses.
 *
 * # Error Taxonomy
 *
 * - `NotFound` - update/delete on a missing message id
 * - `Unauthorized` - missing or invalid bearer credential
 * - `Forbidden` - valid credential without the admin role
 * - `SharedError` - validation failures from the shared module
 * - `DatabaseError` - persistence failures (logged, surfaced as 500)
 * - `SerializationError` - JSON encode/decode failures
 *
 * Nothing here is fatal to the process: a failed request is answered
 * with its status code and the hub keeps serving other clients.
 */
use crate::shared::SharedError;
use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

/// Backend-specific error types
///
/// Each variant maps to one HTTP status code via [`BackendError::status_code`]
/// and can be returned directly from handlers (see the `conversion` module).
///
/// # Usage
///
/// ```rust
/// use agrichat::backend::error::BackendError;
/// use uuid::Uuid;
///
/// let err = BackendError::not_found(Uuid::nil());
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The requested message id does not exist in the store
    #[error("Message not found: {id}")]
    NotFound {
        /// The id that was requested
        id: Uuid,
    },

    /// Missing or invalid bearer credential
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Credential is valid but lacks the required role
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Validation or serialization error from the shared module
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database persistence error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a NotFound error for a message id
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    /// Create an Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `SharedError::ValidationError` - 400 Bad Request
    /// - `SharedError::SerializationError` - 500 Internal Server Error
    /// - `DatabaseError` / `SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
