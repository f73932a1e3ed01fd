//! Abnormality detection rules
//!
//! Rules live in one ordered table. Each rule reads the fields it needs and
//! stays silent when any of them is missing or not numeric. Findings come
//! out in table order regardless of how the record was filled.

use crate::config::EngineConfig;
use crate::error::EvaluationError;
use crate::models::diagnosis::Diagnosis;
use crate::models::measurement::{MeasurementCode, MeasurementRecord};
use crate::models::reference::{ReferenceRange, range_for};
use crate::models::report::Finding;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance phoria below which the basic exophoria pattern applies
pub const BASIC_EXO_DISTANCE: f64 = -2.0;
/// Near phoria below which the basic exophoria pattern applies
pub const BASIC_EXO_NEAR: f64 = -6.0;

/// Which subset of the rule table runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleProfile {
    /// Near points, amplitude, facility and AC/A only
    Minimal,
    /// Every rule, including phoria and vergence range checks
    #[default]
    Full,
}

impl RuleProfile {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Full => "full",
        }
    }
}

impl FromStr for RuleProfile {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "full" => Ok(Self::Full),
            other => Err(EvaluationError::invalid_config(format!(
                "unknown rule profile: {other}"
            ))),
        }
    }
}

impl fmt::Display for RuleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inputs shared by every rule during one detection pass
struct RuleContext<'a> {
    record: &'a MeasurementRecord,
    age: f64,
    config: &'a EngineConfig,
}

impl RuleContext<'_> {
    // Adding zero turns `-0` into `0` so messages never print a signed zero.
    fn value(&self, code: MeasurementCode) -> Option<f64> {
        self.record.value(code).map(|value| value + 0.0)
    }

    fn range(&self, code: MeasurementCode) -> ReferenceRange {
        range_for(code, Some(self.age))
    }
}

struct Rule {
    name: &'static str,
    in_minimal: bool,
    check: fn(&RuleContext<'_>) -> Option<Finding>,
}

const RULES: &[Rule] = &[
    Rule {
        name: "npc_receded",
        in_minimal: true,
        check: npc_receded,
    },
    Rule {
        name: "npa_receded",
        in_minimal: true,
        check: npa_receded,
    },
    Rule {
        name: "reduced_amplitude_od",
        in_minimal: true,
        check: reduced_amplitude_od,
    },
    Rule {
        name: "reduced_facility",
        in_minimal: true,
        check: reduced_facility,
    },
    Rule {
        name: "ac_ratio",
        in_minimal: true,
        check: ac_ratio,
    },
    Rule {
        name: "basic_exophoria_pattern",
        in_minimal: false,
        check: basic_exophoria_pattern,
    },
    Rule {
        name: "distance_exophoria",
        in_minimal: false,
        check: distance_exophoria,
    },
    Rule {
        name: "near_exophoria",
        in_minimal: false,
        check: near_exophoria,
    },
    Rule {
        name: "reduced_bo_ranges",
        in_minimal: false,
        check: reduced_bo_ranges,
    },
];

impl Rule {
    fn active_in(&self, profile: RuleProfile) -> bool {
        match profile {
            RuleProfile::Minimal => self.in_minimal,
            RuleProfile::Full => true,
        }
    }
}

/// Run the configured rules over a record, returning findings in rule order
#[must_use]
pub fn detect(record: &MeasurementRecord, age: f64, config: &EngineConfig) -> Vec<Finding> {
    let ctx = RuleContext {
        record,
        age,
        config,
    };

    RULES
        .iter()
        .filter(|rule| rule.active_in(config.profile))
        .filter_map(|rule| {
            let finding = (rule.check)(&ctx)?;
            log::debug!("Rule {} fired: {}", rule.name, finding.message);
            Some(finding)
        })
        .collect()
}

fn npc_receded(ctx: &RuleContext<'_>) -> Option<Finding> {
    let code = MeasurementCode::Npc;
    let value = ctx.value(code)?;
    (value > ctx.range(code).max).then(|| {
        Finding::new(
            code,
            format!("NPC receded ({value} cm)"),
            Diagnosis::ConvergenceInsufficiency,
        )
    })
}

fn npa_receded(ctx: &RuleContext<'_>) -> Option<Finding> {
    let code = MeasurementCode::Npa;
    let value = ctx.value(code)?;
    (value > ctx.range(code).max).then(|| {
        Finding::new(
            code,
            format!("NPA receded ({value} cm)"),
            Diagnosis::AccommodativeInsufficiency,
        )
    })
}

// Fixed threshold, not the age-adjusted range.
fn reduced_amplitude_od(ctx: &RuleContext<'_>) -> Option<Finding> {
    let code = MeasurementCode::AmplitudeOd;
    let value = ctx.value(code)?;
    (value < ctx.config.amplitude_od_threshold).then(|| {
        Finding::new(
            code,
            format!("Reduced accommodative amplitude OD ({value} D)"),
            Diagnosis::AccommodativeInsufficiency,
        )
    })
}

fn reduced_facility(ctx: &RuleContext<'_>) -> Option<Finding> {
    let code = MeasurementCode::AfOu;
    let value = ctx.value(code)?;
    (value < ctx.range(code).min).then(|| {
        Finding::new(
            code,
            format!("Reduced accommodative facility ({value} cpm)"),
            Diagnosis::AccommodativeInfacility,
        )
    })
}

// High and low are exclusive branches over a single parsed value.
fn ac_ratio(ctx: &RuleContext<'_>) -> Option<Finding> {
    let code = MeasurementCode::AcRatio;
    let value = ctx.value(code)?;
    let range = ctx.range(code);

    if value > range.max {
        Some(Finding::new(
            code,
            format!("High AC/A ratio ({value}:1)"),
            Diagnosis::ConvergenceExcess,
        ))
    } else if value < range.min {
        Some(Finding::new(
            code,
            format!("Low AC/A ratio ({value}:1)"),
            Diagnosis::ConvergenceInsufficiency,
        ))
    } else {
        None
    }
}

fn basic_exophoria_pattern(ctx: &RuleContext<'_>) -> Option<Finding> {
    let distance = ctx.value(MeasurementCode::PhoriaDistance)?;
    let near = ctx.value(MeasurementCode::PhoriaNear)?;
    (distance < BASIC_EXO_DISTANCE && near < BASIC_EXO_NEAR).then(|| {
        Finding::new(
            MeasurementCode::PhoriaDistance,
            "Basic Exophoria pattern",
            Diagnosis::Exophoria,
        )
    })
}

fn distance_exophoria(ctx: &RuleContext<'_>) -> Option<Finding> {
    let code = MeasurementCode::PhoriaDistance;
    let value = ctx.value(code)?;
    (value < ctx.range(code).min).then(|| {
        Finding::new(
            code,
            format!("Distance Exophoria ({value} pd)"),
            Diagnosis::BasicExophoria,
        )
    })
}

fn near_exophoria(ctx: &RuleContext<'_>) -> Option<Finding> {
    let code = MeasurementCode::PhoriaNear;
    let value = ctx.value(code)?;
    (value < ctx.range(code).min).then(|| {
        Finding::new(
            code,
            format!("Near Exophoria ({value} pd)"),
            Diagnosis::ConvergenceInsufficiency,
        )
    })
}

fn reduced_bo_ranges(ctx: &RuleContext<'_>) -> Option<Finding> {
    let code = MeasurementCode::BofBreakNear;
    let value = ctx.value(code)?;
    (value < ctx.range(code).min).then(|| {
        Finding::new(
            code,
            format!("Reduced BO ranges ({value} pd)"),
            Diagnosis::ConvergenceInsufficiency,
        )
    })
}
