//! # debtboard-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Constant configuration of the debt engine: priority weights, rule
//! thresholds and the global duplication policy. Every field has a serde
//! default, so a TOML file only needs the keys it overrides.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Default values and integrity checks
//! * TOML loading
//!
//! ## What does NOT belong here
//! * Scoring or rule evaluation
//! * Risk thresholds (fixed in debtboard-risk)

#![forbid(unsafe_code)]

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allowed distance between the weight total and `1.0`.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Errors from loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse settings TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Weight '{name}' must be within [0, 1], got {value}")]
    WeightOutOfRange { name: &'static str, value: f64 },

    #[error("Priority weights must total 1.0, got {total}")]
    WeightTotal { total: f64 },

    #[error("Threshold '{name}' is invalid: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}

/// Weights combining the normalized metric ratios into one priority.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityWeights {
    pub complexity: f64,
    pub entities: f64,
    pub duplications: f64,
    pub duplicated_lines: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            complexity: 0.40,
            entities: 0.30,
            duplications: 0.20,
            duplicated_lines: 0.10,
        }
    }
}

impl PriorityWeights {
    pub fn total(&self) -> f64 {
        self.complexity + self.entities + self.duplications + self.duplicated_lines
    }

    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("complexity", self.complexity),
            ("entities", self.entities),
            ("duplications", self.duplications),
            ("duplicated_lines", self.duplicated_lines),
        ]
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for (name, value) in self.named() {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::WeightOutOfRange { name, value });
            }
        }
        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(SettingsError::WeightTotal { total });
        }
        Ok(())
    }
}

/// Firing thresholds of the recommendation rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    /// Duplication associations at which a file (or the total) is flagged.
    pub min_duplication_count: u64,
    /// Function count at which a file is flagged.
    pub min_function_count: u64,
    /// Markers per function at which a file is flagged.
    pub min_marker_to_function_ratio: f64,
    /// Share of marker-bearing files at which the file set is flagged.
    pub min_marker_file_ratio: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            min_duplication_count: 5,
            min_function_count: 30,
            min_marker_to_function_ratio: 0.5,
            min_marker_file_ratio: 0.07,
        }
    }
}

impl RuleThresholds {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let ratio = self.min_marker_to_function_ratio;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(SettingsError::InvalidThreshold {
                name: "min_marker_to_function_ratio",
                value: ratio,
            });
        }
        let share = self.min_marker_file_ratio;
        if !(share > 0.0 && share <= 1.0) {
            return Err(SettingsError::InvalidThreshold {
                name: "min_marker_file_ratio",
                value: share,
            });
        }
        if self.min_duplication_count == 0 {
            return Err(SettingsError::InvalidThreshold {
                name: "min_duplication_count",
                value: 0.0,
            });
        }
        if self.min_function_count == 0 {
            return Err(SettingsError::InvalidThreshold {
                name: "min_function_count",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// How the global duplication rule counts offending duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicationPolicy {
    /// Count files whose association count reaches the threshold; fire on one.
    #[default]
    FilesAtThreshold,
    /// Sum association counts over all files; fire when the sum reaches the threshold.
    TotalCount,
}

/// Root engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub weights: PriorityWeights,
    pub rules: RuleThresholds,
    pub duplication_policy: DuplicationPolicy,
}

impl EngineSettings {
    /// Parse settings from a TOML string and validate them.
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.weights.validate()?;
        self.rules.validate()
    }
}
