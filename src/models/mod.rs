//! Domain models for binocular vision evaluation
//!
//! This module contains the measurement vocabulary, reference ranges,
//! diagnosis labels and the report types returned by the engine.

pub mod diagnosis;
pub mod measurement;
pub mod reference;
pub mod report;

// Re-export commonly used types
pub use diagnosis::{Diagnosis, DiagnosisSet};
pub use measurement::{MeasurementCode, MeasurementRecord, parse_measurement, parse_or_zero};
pub use reference::{DEFAULT_AGE, RangeStatus, ReferenceRange, range_for, range_for_name};
pub use report::{
    CriterionResult, EvaluationReport, Finding, RangeCheck, SeriesLabel, VergenceSeriesPoint,
};
