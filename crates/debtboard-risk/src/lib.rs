//! Risk classification from cyclomatic complexity.
//!
//! Thresholds follow the cyclomatic complexity table of Murphy & Robinson
//! (2007), "Design of a Research Platform for En Route Conflict Detection
//! and Resolution". Each threshold is an inclusive upper bound:
//!
//! | Complexity | Risk |
//! |---|---|
//! | `<= 10` | `LOW` |
//! | `<= 20` | `MEDIUM` |
//! | `<= 50` | `HIGH` |
//! | `> 50` | `VERY_HIGH` |
//!
//! The values are fixed; changing them changes every report.

#![forbid(unsafe_code)]

use debtboard_types::RiskLevel;

/// Inclusive upper bounds for `LOW`, `MEDIUM` and `HIGH`.
pub const RISK_THRESHOLDS: [f64; 3] = [10.0, 20.0, 50.0];

/// Classify an average or per-function complexity.
///
/// Total over `f64`: anything not at or below a threshold (including NaN)
/// is `VERY_HIGH`.
#[must_use]
pub fn classify(complexity: f64) -> RiskLevel {
    let [low, medium, high] = RISK_THRESHOLDS;
    if complexity <= low {
        RiskLevel::Low
    } else if complexity <= medium {
        RiskLevel::Medium
    } else if complexity <= high {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    }
}

/// `true` when every threshold is strictly greater than the previous one.
#[must_use]
pub fn thresholds_are_increasing() -> bool {
    RISK_THRESHOLDS.windows(2).all(|w| w[0] < w[1])
}
