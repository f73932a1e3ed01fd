//! Evaluation result types
//!
//! Everything here is produced fresh per evaluation and never mutated after.

use crate::models::diagnosis::Diagnosis;
use crate::models::measurement::MeasurementCode;
use crate::models::reference::{RangeStatus, ReferenceRange};
use serde::Serialize;

/// An abnormal measurement surfaced by a rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// Measurement the rule keyed on
    pub code: MeasurementCode,
    /// Human-readable description
    pub message: String,
    /// Diagnosis implied by the rule
    pub diagnosis: Diagnosis,
}

impl Finding {
    #[must_use]
    pub fn new(code: MeasurementCode, message: impl Into<String>, diagnosis: Diagnosis) -> Self {
        Self {
            code,
            message: message.into(),
            diagnosis,
        }
    }
}

/// Outcome of a composite criterion
///
/// `valid == false` with `error == None` is a computed failure that carries no
/// message; see [`crate::algorithm::binocular::criteria::sheard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionResult {
    pub valid: bool,
    pub error: Option<String>,
}

impl CriterionResult {
    /// Criterion satisfied
    #[must_use]
    pub const fn satisfied() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// Criterion computed as not satisfied, without a message
    #[must_use]
    pub const fn unmet() -> Self {
        Self {
            valid: false,
            error: None,
        }
    }

    /// Criterion failed or could not be computed
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(reason.into()),
        }
    }
}

/// Viewing distance of a vergence series point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeriesLabel {
    Distance,
    Near,
}

/// Fusional vergence values for one viewing distance
///
/// Base-in values are negated so the chart axis reads BI left of zero and BO
/// right of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VergenceSeriesPoint {
    pub label: SeriesLabel,
    pub bi_break: f64,
    pub bi_recovery: f64,
    pub bo_break: f64,
    pub bo_recovery: f64,
}

/// Complete result of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub findings: Vec<Finding>,
    pub diagnoses: Vec<Diagnosis>,
    pub sheard: CriterionResult,
    pub percival: CriterionResult,
    pub vergence_series: [VergenceSeriesPoint; 2],
}

impl EvaluationReport {
    /// Finding messages in rule order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.findings.iter().map(|finding| finding.message.as_str())
    }

    /// Whether no rule fired
    #[must_use]
    pub fn is_unremarkable(&self) -> bool {
        self.findings.is_empty()
    }
}

/// One present measurement checked against its reference range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeCheck {
    pub code: MeasurementCode,
    pub value: f64,
    pub range: ReferenceRange,
    pub status: RangeStatus,
}
