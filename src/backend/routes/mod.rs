//! Routes Module
//!
//! HTTP route configuration and router assembly.

/// Router assembly
pub mod router;

// Re-export the entry point
pub use router::create_router;
