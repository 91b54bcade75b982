//! Individual rules. Each returns `None` when it does not fire.

use debtboard_math::safe_div;
use debtboard_risk::classify;
use debtboard_settings::{DuplicationPolicy, RuleThresholds};
use debtboard_types::{
    FunctionMetric, MetricRecord, MetricStatistics, ProblemRecommendationPair, RiskLevel,
};
use tracing::trace;

use crate::templates::RuleKind;

type Finding = Option<ProblemRecommendationPair>;

fn fire(kind: RuleKind, args: &[&str]) -> Finding {
    trace!(rule = kind.id(), "rule fired");
    Some(kind.emit(args))
}

/// Median average complexity of the file set at or above `MEDIUM`.
pub fn global_risk(medians: &MetricStatistics) -> Finding {
    let risk = classify(medians.average_complexity);
    if risk < RiskLevel::Medium {
        return None;
    }
    fire(RuleKind::GlobalRisk, &[risk.as_str()])
}

/// Duplication across the file set, counted per `policy`.
pub fn global_duplication(
    records: &[MetricRecord],
    thresholds: &RuleThresholds,
    policy: DuplicationPolicy,
) -> Finding {
    let minimum = thresholds.min_duplication_count;
    let (kind, count, fires) = match policy {
        DuplicationPolicy::FilesAtThreshold => {
            let files = records
                .iter()
                .filter(|r| r.duplication_count >= minimum)
                .count() as u64;
            (RuleKind::GlobalDuplication, files, files >= 1)
        }
        DuplicationPolicy::TotalCount => {
            let total = records
                .iter()
                .fold(0u64, |acc, r| acc.saturating_add(r.duplication_count));
            (RuleKind::GlobalDuplicationTotal, total, total >= minimum)
        }
    };
    if !fires {
        return None;
    }
    let (count, minimum) = (count.to_string(), minimum.to_string());
    fire(kind, &[count.as_str(), minimum.as_str()])
}

/// Share of files carrying at least one marker comment.
pub fn global_marker_ratio(records: &[MetricRecord], thresholds: &RuleThresholds) -> Finding {
    let total = records.len();
    let marked = records.iter().filter(|r| r.entity_count > 0).count();
    if total == 0 || safe_div(marked as f64, total as f64) < thresholds.min_marker_file_ratio {
        return None;
    }
    let (total, marked) = (total.to_string(), marked.to_string());
    fire(RuleKind::GlobalMarkerRatio, &[total.as_str(), marked.as_str()])
}

pub fn file_average_risk(filename: &str, risk: RiskLevel) -> Finding {
    if risk < RiskLevel::Medium {
        return None;
    }
    fire(RuleKind::FileAverageRisk, &[filename, risk.as_str()])
}

pub fn file_function_count(
    filename: &str,
    function_count: u64,
    thresholds: &RuleThresholds,
) -> Finding {
    if function_count < thresholds.min_function_count {
        return None;
    }
    let function_count = function_count.to_string();
    fire(RuleKind::FileFunctionCount, &[filename, function_count.as_str()])
}

/// Markers per function. A file without functions has ratio zero.
pub fn file_marker_to_function_ratio(
    filename: &str,
    function_count: u64,
    marker_count: u64,
    thresholds: &RuleThresholds,
) -> Finding {
    if marker_count == 0 {
        return None;
    }
    let ratio = safe_div(marker_count as f64, function_count as f64);
    if ratio < thresholds.min_marker_to_function_ratio {
        return None;
    }
    let (function_count, marker_count) = (function_count.to_string(), marker_count.to_string());
    fire(
        RuleKind::FileMarkerToFunctionRatio,
        &[filename, function_count.as_str(), marker_count.as_str()],
    )
}

pub fn function_risk(function: &FunctionMetric) -> Finding {
    let risk = classify(function.complexity);
    if risk < RiskLevel::Medium {
        return None;
    }
    fire(
        RuleKind::FunctionRisk,
        &[function.file_name.as_str(), function.function_name.as_str(), risk.as_str()],
    )
}
