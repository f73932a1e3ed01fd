//! Measurement codes, raw measurement records and value parsing
//!
//! This module contains the fixed vocabulary of clinical tests and the record
//! type the presentation layer fills with raw field text. Values stay as raw
//! strings until they are read through [`parse_measurement`], so an empty
//! field and a literal `"0"` never collapse into each other.

use crate::error::{EvaluationError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one clinical test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementCode {
    /// Near point of convergence
    Npc,
    /// Near point of accommodation
    Npa,
    /// Amplitude of accommodation, right eye
    AmplitudeOd,
    /// Amplitude of accommodation, left eye
    AmplitudeOs,
    /// Accommodative facility, right eye
    AfOd,
    /// Accommodative facility, left eye
    AfOs,
    /// Accommodative facility, both eyes
    AfOu,
    /// Phoria at distance (negative = exo)
    PhoriaDistance,
    /// Phoria at near (negative = exo)
    PhoriaNear,
    /// AC/A ratio
    AcRatio,
    /// Stereo acuity
    Stereopsis,
    /// Negative relative accommodation
    Nra,
    /// Positive relative accommodation
    Pra,
    BifBreakDistance,
    BifRecoveryDistance,
    BofBlurDistance,
    BofBreakDistance,
    BofRecoveryDistance,
    BifBlurNear,
    BifBreakNear,
    BifRecoveryNear,
    BofBlurNear,
    BofBreakNear,
    BofRecoveryNear,
}

impl MeasurementCode {
    /// Every code in vocabulary order
    pub const ALL: [Self; 24] = [
        Self::Npc,
        Self::Npa,
        Self::AmplitudeOd,
        Self::AmplitudeOs,
        Self::AfOd,
        Self::AfOs,
        Self::AfOu,
        Self::PhoriaDistance,
        Self::PhoriaNear,
        Self::AcRatio,
        Self::Stereopsis,
        Self::Nra,
        Self::Pra,
        Self::BifBreakDistance,
        Self::BifRecoveryDistance,
        Self::BofBlurDistance,
        Self::BofBreakDistance,
        Self::BofRecoveryDistance,
        Self::BifBlurNear,
        Self::BifBreakNear,
        Self::BifRecoveryNear,
        Self::BofBlurNear,
        Self::BofBreakNear,
        Self::BofRecoveryNear,
    ];

    /// Get the wire name for this code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Npc => "npc",
            Self::Npa => "npa",
            Self::AmplitudeOd => "amplitude_od",
            Self::AmplitudeOs => "amplitude_os",
            Self::AfOd => "af_od",
            Self::AfOs => "af_os",
            Self::AfOu => "af_ou",
            Self::PhoriaDistance => "phoria_distance",
            Self::PhoriaNear => "phoria_near",
            Self::AcRatio => "ac_ratio",
            Self::Stereopsis => "stereopsis",
            Self::Nra => "nra",
            Self::Pra => "pra",
            Self::BifBreakDistance => "bif_break_distance",
            Self::BifRecoveryDistance => "bif_recovery_distance",
            Self::BofBlurDistance => "bof_blur_distance",
            Self::BofBreakDistance => "bof_break_distance",
            Self::BofRecoveryDistance => "bof_recovery_distance",
            Self::BifBlurNear => "bif_blur_near",
            Self::BifBreakNear => "bif_break_near",
            Self::BifRecoveryNear => "bif_recovery_near",
            Self::BofBlurNear => "bof_blur_near",
            Self::BofBreakNear => "bof_break_near",
            Self::BofRecoveryNear => "bof_recovery_near",
        }
    }
}

impl FromStr for MeasurementCode {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == name)
            .ok_or_else(|| EvaluationError::unknown_code(s))
    }
}

impl fmt::Display for MeasurementCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a raw field value into a number
///
/// Empty, whitespace-only and non-numeric text (including `NaN` and infinity
/// spellings) yield `None`. Never fails.
#[must_use]
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse a raw field value, substituting `0` when there is no usable number
///
/// Only the composite criteria and the vergence series read values this way.
#[must_use]
pub fn parse_or_zero(raw: &str) -> f64 {
    parse_measurement(raw).unwrap_or(0.0)
}

/// Raw measurement values keyed by code, as entered in the examination form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementRecord {
    values: FxHashMap<MeasurementCode, String>,
}

impl MeasurementRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from code names and raw values
    ///
    /// Fails on the first code name outside the vocabulary.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (name, raw) in pairs {
            let code = name.as_ref().parse::<MeasurementCode>()?;
            record.insert(code, raw);
        }
        Ok(record)
    }

    /// Set a raw value, returning the updated record
    #[must_use]
    pub fn with(mut self, code: MeasurementCode, raw: impl Into<String>) -> Self {
        self.insert(code, raw);
        self
    }

    /// Set a raw value in place
    pub fn insert(&mut self, code: MeasurementCode, raw: impl Into<String>) {
        self.values.insert(code, raw.into());
    }

    /// Get the raw text for a code, if the field was supplied at all
    #[must_use]
    pub fn raw(&self, code: MeasurementCode) -> Option<&str> {
        self.values.get(&code).map(String::as_str)
    }

    /// Whether the field was supplied with non-blank text, numeric or not
    #[must_use]
    pub fn is_filled(&self, code: MeasurementCode) -> bool {
        self.raw(code).is_some_and(|raw| !raw.trim().is_empty())
    }

    /// Get the parsed value for a code; absent and invalid both give `None`
    #[must_use]
    pub fn value(&self, code: MeasurementCode) -> Option<f64> {
        let value = self.raw(code).and_then(parse_measurement);
        log::trace!("{code} -> {value:?}");
        value
    }

    /// Get the parsed value for a code with the zero fallback
    #[must_use]
    pub fn value_or_zero(&self, code: MeasurementCode) -> f64 {
        self.raw(code).map_or(0.0, parse_or_zero)
    }

    /// Number of supplied fields, blank ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no fields were supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
