//! Binocular vision evaluation
//!
//! This module implements the evaluation of a full set of binocular vision
//! and accommodation measurements: abnormality rules, diagnosis aggregation,
//! Sheard's and Percival's criteria and the vergence chart series. The four
//! computations read the same record and never depend on each other.

pub mod criteria;
pub mod diagnosis;
pub mod rules;
pub mod vergence;

use crate::config::EngineConfig;
use crate::models::measurement::{MeasurementCode, MeasurementRecord};
use crate::models::reference::range_for;
use crate::models::report::{EvaluationReport, RangeCheck};
use crate::utils::logging::log_warning;
use chrono::NaiveDate;
use rayon::prelude::*;

pub use rules::RuleProfile;

/// Per-patient options for an evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EvaluationOptions {
    /// Patient age in years
    pub age: Option<f64>,
}

impl EvaluationOptions {
    /// Create options with no patient age
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the patient age
    #[must_use]
    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    /// Derive the patient age in whole years at the examination date
    ///
    /// An examination date before the birth date leaves the age unset.
    #[must_use]
    pub fn from_birth_date(birth_date: NaiveDate, exam_date: NaiveDate) -> Self {
        Self {
            age: exam_date.years_since(birth_date).map(f64::from),
        }
    }

    pub(crate) fn resolved_age(&self, config: &EngineConfig) -> f64 {
        match self.age {
            Some(age) if age.is_finite() && age >= 0.0 => age,
            Some(age) => {
                log_warning(
                    &format!("Ignoring unusable patient age, using {}", config.default_age),
                    Some(&age.to_string()),
                );
                config.default_age
            }
            None => config.default_age,
        }
    }
}

/// Evaluate a measurement record with the default configuration
#[must_use]
pub fn evaluate(record: &MeasurementRecord, options: &EvaluationOptions) -> EvaluationReport {
    evaluate_with_config(record, options, &EngineConfig::default())
}

/// Evaluate a measurement record
#[must_use]
pub fn evaluate_with_config(
    record: &MeasurementRecord,
    options: &EvaluationOptions,
    config: &EngineConfig,
) -> EvaluationReport {
    let age = options.resolved_age(config);

    let findings = rules::detect(record, age, config);
    let diagnoses = diagnosis::aggregate(&findings);

    EvaluationReport {
        findings,
        diagnoses,
        sheard: criteria::sheard_for(record),
        percival: criteria::percival_for(record),
        vergence_series: vergence::build(record),
    }
}

/// Evaluate independent records in parallel, preserving input order
#[must_use]
pub fn evaluate_batch(
    records: &[MeasurementRecord],
    options: &EvaluationOptions,
    config: &EngineConfig,
) -> Vec<EvaluationReport> {
    log::debug!("Evaluating batch of {} records", records.len());
    records
        .par_iter()
        .map(|record| evaluate_with_config(record, options, config))
        .collect()
}

/// Check every present measurement against its reference range
///
/// Results follow vocabulary order; blank and non-numeric fields are left out.
/// Age-dependent ranges use the same age an evaluation would.
#[must_use]
pub fn summarize_ranges(
    record: &MeasurementRecord,
    options: &EvaluationOptions,
    config: &EngineConfig,
) -> Vec<RangeCheck> {
    let age = Some(options.resolved_age(config));
    MeasurementCode::ALL
        .into_iter()
        .filter_map(|code| {
            let value = record.value(code)?;
            let range = range_for(code, age);
            Some(RangeCheck {
                code,
                value,
                range,
                status: range.classify(value),
            })
        })
        .collect()
}
