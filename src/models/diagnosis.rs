//! Diagnosis labels and the ordered diagnosis set
//!
//! Diagnoses are presence-only labels drawn from a fixed vocabulary. The set
//! keeps first-seen order and drops repeats.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Candidate diagnosis implied by a fired rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagnosis {
    #[serde(rename = "Convergence Insufficiency")]
    ConvergenceInsufficiency,
    #[serde(rename = "Accommodative Insufficiency")]
    AccommodativeInsufficiency,
    #[serde(rename = "Accommodative Infacility")]
    AccommodativeInfacility,
    #[serde(rename = "Convergence Excess")]
    ConvergenceExcess,
    #[serde(rename = "Exophoria")]
    Exophoria,
    #[serde(rename = "Basic Exophoria")]
    BasicExophoria,
}

impl Diagnosis {
    /// Get the display label for this diagnosis
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ConvergenceInsufficiency => "Convergence Insufficiency",
            Self::AccommodativeInsufficiency => "Accommodative Insufficiency",
            Self::AccommodativeInfacility => "Accommodative Infacility",
            Self::ConvergenceExcess => "Convergence Excess",
            Self::Exophoria => "Exophoria",
            Self::BasicExophoria => "Basic Exophoria",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Insertion-ordered set of diagnoses
#[derive(Debug, Clone, Default)]
pub struct DiagnosisSet {
    ordered: Vec<Diagnosis>,
    seen: FxHashSet<Diagnosis>,
}

impl DiagnosisSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnosis unless already present; returns whether it was added
    pub fn insert(&mut self, diagnosis: Diagnosis) -> bool {
        if !self.seen.insert(diagnosis) {
            return false;
        }
        self.ordered.push(diagnosis);
        true
    }

    /// Consume the set, returning diagnoses in first-seen order
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnosis> {
        self.ordered
    }
}

impl FromIterator<Diagnosis> for DiagnosisSet {
    fn from_iter<T: IntoIterator<Item = Diagnosis>>(iter: T) -> Self {
        let mut set = Self::new();
        for diagnosis in iter {
            if !set.insert(diagnosis) {
                log::trace!("Dropping repeated diagnosis {diagnosis}");
            }
        }
        set
    }
}
