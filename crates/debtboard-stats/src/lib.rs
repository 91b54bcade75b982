//! Statistics aggregation across a file set.
//!
//! Each statistic is computed per [`Dimension`] over the full set of
//! records. An empty set yields [`MetricStatistics::ZERO`] for every
//! statistic, and the result never depends on record order.

#![forbid(unsafe_code)]

use debtboard_math::{max_f64, mean, median};
use debtboard_types::{Dimension, FunctionMetric, MetricRecord, MetricStatistics, StatisticsSummary};

/// Largest value per dimension.
pub fn maximums(records: &[MetricRecord]) -> MetricStatistics {
    aggregate(records, max_f64)
}

/// Arithmetic mean per dimension.
pub fn averages(records: &[MetricRecord]) -> MetricStatistics {
    aggregate(records, mean)
}

/// Median per dimension, over values sorted ascending.
pub fn medians(records: &[MetricRecord]) -> MetricStatistics {
    aggregate(records, median)
}

/// All three statistics for `records`.
pub fn summarize(records: &[MetricRecord]) -> StatisticsSummary {
    StatisticsSummary {
        maximums: maximums(records),
        averages: averages(records),
        medians: medians(records),
    }
}

/// Mean complexity of a file's functions, `0.0` when it has none.
pub fn average_complexity(functions: &[FunctionMetric]) -> f64 {
    let values: Vec<f64> = functions.iter().map(|f| f.complexity).collect();
    mean(&values)
}

fn aggregate(records: &[MetricRecord], stat: fn(&[f64]) -> f64) -> MetricStatistics {
    MetricStatistics::from_fn(|dimension| stat(&column(records, dimension)))
}

fn column(records: &[MetricRecord], dimension: Dimension) -> Vec<f64> {
    records.iter().map(|r| r.value(dimension)).collect()
}
