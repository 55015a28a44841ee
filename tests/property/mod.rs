//! Property-based tests

pub mod grouping_proptest;
pub mod validation_proptest;
