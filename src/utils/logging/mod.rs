//! Logging utilities for evaluation output
//!
//! This module provides utilities for logging and console output.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use console::{print_range_summary, print_report_summary};
pub use log::{log_evaluation_complete, log_evaluation_start, log_warning};
