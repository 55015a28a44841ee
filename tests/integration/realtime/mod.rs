//! Realtime fan-out tests
