//! API integration tests

pub mod admin_test;
pub mod chat_test;
