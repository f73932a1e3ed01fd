//! A Rust library for evaluating binocular vision and accommodation
//! measurements against clinical reference ranges.
//!
//! Output is advisory. The library never persists data and never fails on
//! clinical input: blank or non-numeric fields skip the rules that need them.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::EngineConfig;
pub use error::{EvaluationError, Result};
pub use models::{
    CriterionResult, Diagnosis, EvaluationReport, Finding, MeasurementCode, MeasurementRecord,
    RangeCheck, RangeStatus, ReferenceRange, SeriesLabel, VergenceSeriesPoint,
};

// Parsing and reference ranges
pub use models::{parse_measurement, parse_or_zero, range_for, range_for_name};

// Evaluation entry points
pub use algorithm::binocular::{
    EvaluationOptions, RuleProfile, evaluate, evaluate_batch, evaluate_with_config,
    summarize_ranges,
};
