//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Application fixtures (router + state, no database)
//! - Authentication test helpers
//! - Response body helpers

pub mod fixtures;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use fixtures::*;
