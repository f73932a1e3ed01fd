//! Reference ranges for clinical measurements
//!
//! Every code in the vocabulary has a range. Bounds are computed per lookup so
//! the amplitude of accommodation can follow patient age.

use crate::error::Result;
use crate::models::measurement::MeasurementCode;
use serde::Serialize;
use std::fmt;

/// Age used for age-dependent ranges when none is supplied
pub const DEFAULT_AGE: f64 = 30.0;

/// Valid numeric bounds for one measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
    /// Unit of measurement
    pub unit: &'static str,
    /// Human-readable test description
    pub description: &'static str,
}

/// Position of a value relative to its reference range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    /// Below the lower bound
    Below,
    /// Within bounds
    Within,
    /// Above the upper bound
    Above,
}

impl ReferenceRange {
    const fn new(min: f64, max: f64, unit: &'static str, description: &'static str) -> Self {
        Self {
            min,
            max,
            unit,
            description,
        }
    }

    /// Classify a value against this range
    #[must_use]
    pub fn classify(&self, value: f64) -> RangeStatus {
        if value < self.min {
            RangeStatus::Below
        } else if value > self.max {
            RangeStatus::Above
        } else {
            RangeStatus::Within
        }
    }
}

impl fmt::Display for ReferenceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} {}", self.min, self.max, self.unit)
    }
}

/// Get the reference range for a measurement code
///
/// `age` only affects the amplitude codes; `None` means [`DEFAULT_AGE`].
#[must_use]
pub fn range_for(code: MeasurementCode, age: Option<f64>) -> ReferenceRange {
    use crate::models::measurement::MeasurementCode as C;

    match code {
        C::Npc => ReferenceRange::new(0.0, 6.0, "cm", "Near point of convergence"),
        C::Npa => ReferenceRange::new(0.0, 10.0, "cm", "Near point of accommodation"),
        C::AmplitudeOd => amplitude_range(age, "Amplitude of accommodation OD"),
        C::AmplitudeOs => amplitude_range(age, "Amplitude of accommodation OS"),
        C::AfOd => ReferenceRange::new(6.0, 20.0, "cpm", "Accommodative facility OD"),
        C::AfOs => ReferenceRange::new(6.0, 20.0, "cpm", "Accommodative facility OS"),
        C::AfOu => ReferenceRange::new(3.0, 20.0, "cpm", "Accommodative facility OU"),
        C::PhoriaDistance => ReferenceRange::new(-2.0, 2.0, "pd", "Distance phoria"),
        C::PhoriaNear => ReferenceRange::new(-6.0, 0.0, "pd", "Near phoria"),
        C::AcRatio => ReferenceRange::new(3.0, 5.0, ":1", "AC/A ratio"),
        C::Stereopsis => ReferenceRange::new(0.0, 40.0, "arc sec", "Stereo acuity"),
        C::Nra => ReferenceRange::new(1.5, 2.5, "D", "Negative relative accommodation"),
        C::Pra => ReferenceRange::new(-3.5, -1.25, "D", "Positive relative accommodation"),
        C::BifBreakDistance => ReferenceRange::new(4.0, 10.0, "pd", "BI break at distance"),
        C::BifRecoveryDistance => {
            ReferenceRange::new(2.0, 6.0, "pd", "BI recovery at distance")
        }
        C::BofBlurDistance => ReferenceRange::new(5.0, 13.0, "pd", "BO blur at distance"),
        C::BofBreakDistance => ReferenceRange::new(11.0, 27.0, "pd", "BO break at distance"),
        C::BofRecoveryDistance => {
            ReferenceRange::new(6.0, 14.0, "pd", "BO recovery at distance")
        }
        C::BifBlurNear => ReferenceRange::new(9.0, 17.0, "pd", "BI blur at near"),
        C::BifBreakNear => ReferenceRange::new(17.0, 25.0, "pd", "BI break at near"),
        C::BifRecoveryNear => ReferenceRange::new(8.0, 18.0, "pd", "BI recovery at near"),
        C::BofBlurNear => ReferenceRange::new(12.0, 22.0, "pd", "BO blur at near"),
        C::BofBreakNear => ReferenceRange::new(15.0, 27.0, "pd", "BO break at near"),
        C::BofRecoveryNear => ReferenceRange::new(4.0, 18.0, "pd", "BO recovery at near"),
    }
}

/// Get the reference range for a code given by name
///
/// Unknown names fail fast with [`crate::error::EvaluationError::UnknownCode`].
pub fn range_for_name(name: &str, age: Option<f64>) -> Result<ReferenceRange> {
    let code = name.parse::<MeasurementCode>()?;
    Ok(range_for(code, age))
}

// Hofstetter's minimum and maximum expected amplitude
fn amplitude_range(age: Option<f64>, description: &'static str) -> ReferenceRange {
    let age = age.unwrap_or(DEFAULT_AGE);
    ReferenceRange::new(15.0 - 0.25 * age, 25.0 - 0.25 * age, "D", description)
}
