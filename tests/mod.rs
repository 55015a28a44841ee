//! Test suite for AgriChat
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
pub mod property;
