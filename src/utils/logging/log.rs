//! Logging utilities
//!
//! This module provides standardized logging functions for evaluations.

use crate::models::report::EvaluationReport;
use itertools::Itertools;

/// Log an evaluation start with consistent format
///
/// # Arguments
/// * `source` - Where the record came from (file name, batch index, ...)
/// * `fields` - Number of supplied fields
pub fn log_evaluation_start(source: &str, fields: usize) {
    log::info!("Evaluating {fields} measurements from {source}");
}

/// Log an evaluation completion with consistent format
///
/// # Arguments
/// * `source` - Where the record came from
/// * `report` - The finished report
/// * `elapsed` - Optional elapsed time
pub fn log_evaluation_complete(
    source: &str,
    report: &EvaluationReport,
    elapsed: Option<std::time::Duration>,
) {
    let diagnoses = if report.diagnoses.is_empty() {
        "none".to_string()
    } else {
        report.diagnoses.iter().join(", ")
    };

    if let Some(duration) = elapsed {
        log::info!(
            "Evaluated {} in {:?}: {} findings, diagnoses: {}",
            source,
            duration,
            report.findings.len(),
            diagnoses
        );
    } else {
        log::info!(
            "Evaluated {}: {} findings, diagnoses: {}",
            source,
            report.findings.len(),
            diagnoses
        );
    }
}

/// Log a warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `source` - Optional record source related to the warning
pub fn log_warning(message: &str, source: Option<&str>) {
    if let Some(source) = source {
        log::warn!("{message}: {source}");
    } else {
        log::warn!("{message}");
    }
}
