//! Integration tests
//!
//! End-to-end coverage of the HTTP API and the realtime fan-out path.

pub mod api;
pub mod realtime;
