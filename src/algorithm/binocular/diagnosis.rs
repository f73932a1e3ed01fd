//! Diagnosis aggregation from fired rules

use crate::models::diagnosis::{Diagnosis, DiagnosisSet};
use crate::models::report::Finding;

/// Collect the diagnoses implied by findings, first occurrence kept
#[must_use]
pub fn aggregate(findings: &[Finding]) -> Vec<Diagnosis> {
    findings
        .iter()
        .map(|finding| finding.diagnosis)
        .collect::<DiagnosisSet>()
        .into_vec()
}
