//! Test helper functions
//!
//! This module provides utilities for testing and benchmarking.

use crate::Result;
use crate::models::measurement::MeasurementRecord;
use crate::models::report::EvaluationReport;
use std::time::Instant;

/// Build a record from code names and raw values
pub fn record_from(pairs: &[(&str, &str)]) -> Result<MeasurementRecord> {
    MeasurementRecord::from_pairs(pairs.iter().copied())
}

/// Finding messages of a report, in rule order
#[must_use]
pub fn finding_messages(report: &EvaluationReport) -> Vec<String> {
    report.messages().map(str::to_string).collect()
}

/// Diagnosis labels of a report, in first-seen order
#[must_use]
pub fn diagnosis_labels(report: &EvaluationReport) -> Vec<&'static str> {
    report.diagnoses.iter().map(|diagnosis| diagnosis.label()).collect()
}

/// Timed execution of an evaluation
pub fn timed_evaluation<F>(func: F) -> (std::time::Duration, EvaluationReport)
where
    F: FnOnce() -> EvaluationReport,
{
    let start = Instant::now();
    let report = func();
    let elapsed = start.elapsed();
    (elapsed, report)
}
