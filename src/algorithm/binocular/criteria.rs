//! Sheard's and Percival's criteria
//!
//! Presence checks run on the raw field text, before any parsing. Once a
//! required field is filled, non-numeric text in it counts as `0` in the
//! arithmetic, as does a blank optional field.

use crate::models::measurement::{MeasurementCode, MeasurementRecord};
use crate::models::report::CriterionResult;

pub const SHEARD_MISSING: &str = "Missing required values for Sheard Criterion";
pub const SHEARD_INVALID: &str = "Invalid input for Sheard Criterion";
pub const PERCIVAL_MISSING: &str = "Missing required values for Percival's Criterion";
pub const PERCIVAL_NOT_MET: &str = "Percival's Criterion not met";

/// Sheard's criterion: compensating vergence must be at least twice the phoria
///
/// A numeric failure returns `valid: false` with no error message. Callers
/// that only look at `error` will read that as satisfied.
#[must_use]
pub fn sheard(phoria_near: Option<f64>, bo_break_near: Option<f64>) -> CriterionResult {
    let (Some(phoria), Some(bo_break)) = (phoria_near, bo_break_near) else {
        return CriterionResult::failed(SHEARD_MISSING);
    };

    let compensating_vergence = bo_break / 2.0;
    if !compensating_vergence.is_finite() || !phoria.is_finite() {
        return CriterionResult::failed(SHEARD_INVALID);
    }

    if compensating_vergence >= phoria.abs() {
        CriterionResult::satisfied()
    } else {
        CriterionResult::unmet()
    }
}

/// Percival's criterion: phoria within the middle third of the vergence range
#[must_use]
pub fn percival(
    phoria_near: Option<f64>,
    bo_break_near: Option<f64>,
    bi_break_near: Option<f64>,
) -> CriterionResult {
    let (Some(bo_break), Some(bi_break)) = (bo_break_near, bi_break_near) else {
        return CriterionResult::failed(PERCIVAL_MISSING);
    };

    let ideal = (bo_break - bi_break) / 3.0;
    let phoria = phoria_near.unwrap_or(0.0);

    if phoria.abs() <= ideal {
        CriterionResult::satisfied()
    } else {
        CriterionResult::failed(PERCIVAL_NOT_MET)
    }
}

/// Sheard's criterion over a measurement record
#[must_use]
pub fn sheard_for(record: &MeasurementRecord) -> CriterionResult {
    sheard(
        filled_or_zero(record, MeasurementCode::PhoriaNear),
        filled_or_zero(record, MeasurementCode::BofBreakNear),
    )
}

/// Percival's criterion over a measurement record
#[must_use]
pub fn percival_for(record: &MeasurementRecord) -> CriterionResult {
    percival(
        record.value(MeasurementCode::PhoriaNear),
        filled_or_zero(record, MeasurementCode::BofBreakNear),
        filled_or_zero(record, MeasurementCode::BifBreakNear),
    )
}

// Filled fields count even when their text is not a number.
fn filled_or_zero(record: &MeasurementRecord, code: MeasurementCode) -> Option<f64> {
    record.is_filled(code).then(|| record.value_or_zero(code))
}
