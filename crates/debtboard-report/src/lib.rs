//! # debtboard-report
//!
//! **Tier 3 (Orchestration)**
//!
//! Assembles a [`DebtReport`] from one metric snapshot: statistics first,
//! then priority, risk and recommendations per file, then the global
//! recommendations.
//!
//! ## What belongs here
//! * Input validation ([`DebtInput::validate`])
//! * Report assembly ([`build_report`])
//!
//! ## What does NOT belong here
//! * Metric extraction (callers supply typed records)
//! * Rendering (see `debtboard-format`)
//! * Rule definitions (see `debtboard-recommend`)

#![forbid(unsafe_code)]

mod error;
mod input;

use debtboard_settings::EngineSettings;
use debtboard_types::{
    DEBT_SCHEMA_VERSION, DebtReport, FileDebtEntry, MetricRecord, RecommendationReport,
    StatisticsSummary, Summary, TechDebtReport,
};
use rayon::prelude::*;
use tracing::{debug, info_span, warn};

pub use error::ReportError;
pub use input::DebtInput;

/// Build the debt report for `input`.
///
/// Nothing is returned on a contract violation; the first problem found is
/// reported instead. Files keep their input order in both the debt and the
/// recommendation sections.
pub fn build_report(input: &DebtInput, settings: &EngineSettings) -> Result<DebtReport, ReportError> {
    let span = info_span!("debt_report", files = input.files.len());
    let _enter = span.enter();

    if let Err(err) = check(input, settings) {
        warn!(error = %err, "rejecting debt input");
        return Err(err);
    }

    let statistics = debtboard_stats::summarize(&input.files);
    debug!(
        max_complexity = statistics.maximums.average_complexity,
        median_complexity = statistics.medians.average_complexity,
        "statistics aggregated"
    );

    let (files, summaries): (Vec<FileDebtEntry>, Vec<Summary>) = input
        .files
        .par_iter()
        .map(|record| {
            let _enter = span.enter();
            let entry = file_entry(record, &statistics, settings);
            let summary = debtboard_recommend::file_summary(
                &entry,
                input.functions_of(&record.file_name),
                &settings.rules,
            );
            (entry, summary)
        })
        .collect::<Vec<_>>()
        .into_iter()
        .unzip();

    let global = debtboard_recommend::global_summary(&input.files, &statistics, settings);
    debug!(
        global_problems = global.problems.len(),
        file_problems = summaries.iter().map(|s| s.problems.len()).sum::<usize>(),
        "rules evaluated"
    );

    Ok(DebtReport {
        schema_version: DEBT_SCHEMA_VERSION,
        debt: TechDebtReport { statistics, files },
        recommendations: RecommendationReport {
            global,
            files: summaries,
        },
    })
}

fn check(input: &DebtInput, settings: &EngineSettings) -> Result<(), ReportError> {
    settings.validate()?;
    input.validate()
}

fn file_entry(
    record: &MetricRecord,
    statistics: &StatisticsSummary,
    settings: &EngineSettings,
) -> FileDebtEntry {
    FileDebtEntry {
        filename: record.file_name.clone(),
        priority: debtboard_priority::score(record, &statistics.maximums, &settings.weights),
        risk: debtboard_risk::classify(record.average_complexity),
        metrics: record.clone(),
    }
}
