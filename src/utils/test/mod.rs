//! Test utilities
//!
//! This module provides record fixtures and helpers shared by unit and
//! integration tests.

pub mod helpers;

// Re-export commonly used functions for convenience
pub use fixtures::{
    blank_record, convergence_insufficiency_record, convergence_excess_record, normal_record,
};
pub use helpers::{diagnosis_labels, finding_messages, record_from, timed_evaluation};
