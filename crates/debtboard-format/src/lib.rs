//! # debtboard-format
//!
//! Rendering for debt reports.

#![forbid(unsafe_code)]

use anyhow::Result;
use debtboard_types::{DebtReport, Dimension, StatisticsSummary, Summary};
use serde::{Deserialize, Serialize};

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DebtFormat {
    #[default]
    Md,
    Json,
}

pub fn render(report: &DebtReport, format: DebtFormat) -> Result<String> {
    match format {
        DebtFormat::Md => Ok(render_md(report)),
        DebtFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_md(report: &DebtReport) -> String {
    let mut out = String::new();
    out.push_str("# Technical debt report\n\n");
    out.push_str(&format!("Schema version: `{}`\n\n", report.schema_version));

    out.push_str("## Global\n\n");
    let global = &report.recommendations.global;
    if global.is_empty() {
        out.push_str("No problems detected.\n\n");
    } else {
        push_summary(&mut out, global, "###");
    }

    out.push_str("## Statistics\n\n");
    push_statistics(&mut out, &report.debt.statistics);

    out.push_str("## Files\n\n");
    if report.debt.files.is_empty() {
        out.push_str("No files.\n\n");
    } else {
        out.push_str("|File|Priority|Risk|Complexity|Markers|Duplications|Dup. lines|\n");
        out.push_str("|---|---:|---|---:|---:|---:|---:|\n");
        for entry in report.debt.ranked_by_priority() {
            out.push_str(&format!(
                "|{}|{}|{}|{}|{}|{}|{}|\n",
                entry.filename,
                fmt_f64(entry.priority, 4),
                entry.risk,
                fmt_f64(entry.metrics.average_complexity, 2),
                entry.metrics.entity_count,
                entry.metrics.duplication_count,
                entry.metrics.duplicated_lines
            ));
        }
        out.push('\n');
    }

    let flagged: Vec<&Summary> = report
        .recommendations
        .files
        .iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !flagged.is_empty() {
        out.push_str("## File recommendations\n\n");
        for summary in flagged {
            out.push_str(&format!("### `{}`\n\n", summary.subject));
            push_summary(&mut out, summary, "####");
        }
    }

    out
}

fn push_summary(out: &mut String, summary: &Summary, heading: &str) {
    out.push_str(&format!("{heading} Problems\n\n"));
    for problem in &summary.problems {
        out.push_str(&format!("- {problem}\n"));
    }
    out.push('\n');
    if !summary.recommendations.is_empty() {
        out.push_str(&format!("{heading} Recommendations\n\n"));
        for recommendation in &summary.recommendations {
            out.push_str(&format!("- {recommendation}\n"));
        }
        out.push('\n');
    }
}

fn push_statistics(out: &mut String, statistics: &StatisticsSummary) {
    out.push_str("|Metric|Maximum|Average|Median|\n");
    out.push_str("|---|---:|---:|---:|\n");
    for dimension in Dimension::ALL {
        out.push_str(&format!(
            "|{}|{}|{}|{}|\n",
            dimension.as_str(),
            fmt_f64(statistics.maximums.get(dimension), 2),
            fmt_f64(statistics.averages.get(dimension), 2),
            fmt_f64(statistics.medians.get(dimension), 2)
        ));
    }
    out.push('\n');
}

fn fmt_f64(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
