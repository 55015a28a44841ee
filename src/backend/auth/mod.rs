//! Authentication Module
//!
//! Bearer-token verification for the backend's privileged routes. Token
//! issuance (signup/login) belongs to the external auth service; the
//! chat backend only checks the signature and the embedded role claim.

/// JWT claims and token verification
pub mod sessions;

// Re-export commonly used items
pub use sessions::{verify_token, Claims, ROLE_ADMIN, ROLE_USER};
