//! # debtboard-recommend
//!
//! **Tier 2 (Recommendation Rules)**
//!
//! Evaluates a fixed rule set against metrics and statistics and turns
//! every rule that fires into a problem/recommendation pair.
//!
//! ## Rules
//! * Global: median risk, duplication, marker-comment share
//! * Per file: average risk, function count, markers per function
//! * Per function: function risk
//!
//! All rules of a scope are evaluated; none short-circuits another. Rules
//! that do not fire yield `None`, which [`Summary::add`] discards.

#![forbid(unsafe_code)]

pub mod rules;
mod templates;

use debtboard_settings::EngineSettings;
use debtboard_settings::RuleThresholds;
use debtboard_types::{
    FileDebtEntry, FunctionMetric, MetricRecord, ProblemRecommendationPair, StatisticsSummary,
    Summary,
};

pub use templates::{RuleKind, interpolate};

/// Outcome of every global rule, in rule order.
pub fn global_pairs(
    records: &[MetricRecord],
    statistics: &StatisticsSummary,
    settings: &EngineSettings,
) -> Vec<Option<ProblemRecommendationPair>> {
    vec![
        rules::global_risk(&statistics.medians),
        rules::global_duplication(records, &settings.rules, settings.duplication_policy),
        rules::global_marker_ratio(records, &settings.rules),
    ]
}

/// Outcome of every file rule for `entry`, then every function rule.
pub fn file_pairs(
    entry: &FileDebtEntry,
    functions: &[FunctionMetric],
    thresholds: &RuleThresholds,
) -> Vec<Option<ProblemRecommendationPair>> {
    let function_count = functions.len() as u64;
    let mut pairs = vec![
        rules::file_average_risk(&entry.filename, entry.risk),
        rules::file_function_count(&entry.filename, function_count, thresholds),
        rules::file_marker_to_function_ratio(
            &entry.filename,
            function_count,
            entry.metrics.entity_count,
            thresholds,
        ),
    ];
    pairs.extend(functions.iter().map(rules::function_risk));
    pairs
}

pub fn global_summary(
    records: &[MetricRecord],
    statistics: &StatisticsSummary,
    settings: &EngineSettings,
) -> Summary {
    let mut summary = Summary::global();
    summary.add_all(global_pairs(records, statistics, settings));
    summary
}

pub fn file_summary(
    entry: &FileDebtEntry,
    functions: &[FunctionMetric],
    thresholds: &RuleThresholds,
) -> Summary {
    let mut summary = Summary::new(entry.filename.clone());
    summary.add_all(file_pairs(entry, functions, thresholds));
    summary
}
