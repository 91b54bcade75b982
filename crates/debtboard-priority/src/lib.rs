//! Priority scoring.
//!
//! A file's priority is the weighted sum of its metric ratios against the
//! maximums of the same run:
//!
//! `priority = Σ weight[dim] * (value[dim] / max[dim])`
//!
//! Higher means more urgent. A dimension whose maximum is zero contributes
//! nothing. Scores only rank files within one run; the maximums change
//! between runs.

#![forbid(unsafe_code)]

use debtboard_math::safe_div;
use debtboard_settings::PriorityWeights;
use debtboard_types::{Dimension, MetricRecord, MetricStatistics};

/// Per-dimension `value / maximum`, `0.0` where the maximum is not positive.
pub fn ratios(record: &MetricRecord, maximums: &MetricStatistics) -> MetricStatistics {
    MetricStatistics::from_fn(|d| safe_div(record.value(d), maximums.get(d)))
}

/// Weighted priority of `record` in `[0, 1]` for weights totalling one.
pub fn score(record: &MetricRecord, maximums: &MetricStatistics, weights: &PriorityWeights) -> f64 {
    weighted_sum(&ratios(record, maximums), weights)
}

pub fn weighted_sum(ratios: &MetricStatistics, weights: &PriorityWeights) -> f64 {
    Dimension::ALL
        .into_iter()
        .map(|d| ratios.get(d) * weight(weights, d))
        .sum()
}

fn weight(weights: &PriorityWeights, dimension: Dimension) -> f64 {
    match dimension {
        Dimension::Complexity => weights.complexity,
        Dimension::Entities => weights.entities,
        Dimension::Duplications => weights.duplications,
        Dimension::DuplicatedLines => weights.duplicated_lines,
    }
}
