//! Console output utilities
//!
//! This module provides utilities for formatted console output.

use crate::models::report::{CriterionResult, EvaluationReport, RangeCheck};
use itertools::Itertools;

/// Print a human-readable summary of a report
pub fn print_report_summary(report: &EvaluationReport) {
    if report.is_unremarkable() {
        println!("Findings: none");
    } else {
        println!("Findings:");
        for finding in &report.findings {
            println!("  - {} [{}]", finding.message, finding.diagnosis);
        }
    }

    println!(
        "Diagnoses: {}",
        if report.diagnoses.is_empty() {
            "none".to_string()
        } else {
            report.diagnoses.iter().join(", ")
        }
    );
    println!("Sheard: {}", criterion_line(&report.sheard));
    println!("Percival: {}", criterion_line(&report.percival));

    for point in &report.vergence_series {
        println!(
            "{:?}: BI {}/{} BO {}/{}",
            point.label, point.bi_break, point.bi_recovery, point.bo_break, point.bo_recovery
        );
    }
}

/// Print every present measurement with its reference range
pub fn print_range_summary(checks: &[RangeCheck]) {
    println!("Measurements:");
    for check in checks {
        println!(
            "  - {} = {} ({}, {:?})",
            check.code, check.value, check.range, check.status
        );
    }
}

fn criterion_line(result: &CriterionResult) -> String {
    match (&result.error, result.valid) {
        (Some(error), _) => error.clone(),
        (None, true) => "met".to_string(),
        (None, false) => "not met".to_string(),
    }
}
