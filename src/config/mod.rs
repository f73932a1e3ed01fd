//! Configuration for the evaluation engine.

use crate::algorithm::binocular::rules::RuleProfile;
use crate::error::{EvaluationError, Result};
use crate::models::reference::DEFAULT_AGE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Amplitude below which the OD amplitude rule fires, independent of age
pub const AMPLITUDE_OD_THRESHOLD: f64 = 15.0;

/// Configuration for the evaluation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Which rules the abnormality detector runs
    pub profile: RuleProfile,
    /// Patient age assumed when the caller supplies none (in years)
    pub default_age: f64,
    /// Fixed amplitude threshold for the OD amplitude rule (in diopters)
    pub amplitude_od_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            profile: RuleProfile::Full,
            default_age: DEFAULT_AGE,
            amplitude_od_threshold: AMPLITUDE_OD_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run only the minimal rule set
    #[must_use]
    pub fn minimal(mut self) -> Self {
        self.profile = RuleProfile::Minimal;
        self
    }

    /// Set the rule profile
    #[must_use]
    pub fn with_profile(mut self, profile: RuleProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the age assumed when none is supplied
    #[must_use]
    pub fn with_default_age(mut self, age: f64) -> Self {
        self.default_age = age;
        self
    }

    /// Check that the configured values are usable
    pub fn validate(&self) -> Result<()> {
        if !self.default_age.is_finite() || self.default_age < 0.0 {
            return Err(EvaluationError::invalid_config(format!(
                "default_age must be a non-negative number, got {}",
                self.default_age
            )));
        }
        if !self.amplitude_od_threshold.is_finite() {
            return Err(EvaluationError::invalid_config(
                "amplitude_od_threshold must be finite",
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    ///
    /// Missing keys take their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::debug!("Loaded engine configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}
