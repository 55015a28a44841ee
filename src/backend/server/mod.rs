//! Server Module
//!
//! Server initialization, application state, and configuration.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration (database, port)
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - App assembly and state restoration
//! ```

/// Environment configuration
pub mod config;

/// App assembly and state restoration
pub mod init;

/// Application state
pub mod state;

// Re-export commonly used types
pub use state::AppState;
