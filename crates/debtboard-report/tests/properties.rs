//! Property-based tests for `debtboard-report`.

use proptest::prelude::*;

use debtboard_report::{DebtInput, build_report};
use debtboard_settings::EngineSettings;
use debtboard_types::{FunctionMetric, MetricRecord};

fn arb_input() -> impl Strategy<Value = DebtInput> {
    let file = (0.0f64..80.0, 0..6u64, 0..10u64, 0..40u64, proptest::collection::vec(0.0f64..80.0, 0..6));
    proptest::collection::vec(file, 0..25).prop_map(|files| {
        let mut records = Vec::new();
        let mut functions = Vec::new();
        for (i, (c, e, d, l, complexities)) in files.into_iter().enumerate() {
            let name = format!("src/f{i}.py");
            for (j, complexity) in complexities.into_iter().enumerate() {
                functions.push(FunctionMetric {
                    file_name: name.clone(),
                    function_name: format!("fn{j}()"),
                    complexity,
                });
            }
            records.push(MetricRecord {
                file_id: i as u64,
                file_name: name,
                average_complexity: c,
                entity_count: e,
                duplication_count: d,
                duplicated_lines: l,
            });
        }
        DebtInput::group(records, functions).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_report_is_idempotent(input in arb_input()) {
        let settings = EngineSettings::default();
        let first = build_report(&input, &settings).unwrap();
        let second = build_report(&input, &settings).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn prop_one_entry_and_summary_per_file_in_order(input in arb_input()) {
        let report = build_report(&input, &EngineSettings::default()).unwrap();
        prop_assert_eq!(report.debt.files.len(), input.files.len());
        prop_assert_eq!(report.recommendations.files.len(), input.files.len());
        for ((record, entry), summary) in input
            .files
            .iter()
            .zip(&report.debt.files)
            .zip(&report.recommendations.files)
        {
            prop_assert_eq!(&record.file_name, &entry.filename);
            prop_assert_eq!(&record.file_name, &summary.subject);
        }
    }

    #[test]
    fn prop_priorities_stay_in_unit_interval(input in arb_input()) {
        let report = build_report(&input, &EngineSettings::default()).unwrap();
        for entry in &report.debt.files {
            prop_assert!((0.0..=1.0 + 1e-9).contains(&entry.priority), "{}", entry.priority);
        }
    }

    #[test]
    fn prop_sentinel_never_serialized(input in arb_input()) {
        let report = build_report(&input, &EngineSettings::default()).unwrap();
        let summaries = std::iter::once(&report.recommendations.global)
            .chain(&report.recommendations.files);
        for summary in summaries {
            prop_assert!(!summary.problems.contains(""));
            prop_assert!(!summary.recommendations.contains(""));
        }
    }

    #[test]
    fn prop_maximum_bounds_every_file(input in arb_input()) {
        let report = build_report(&input, &EngineSettings::default()).unwrap();
        let max = &report.debt.statistics.maximums;
        for entry in &report.debt.files {
            prop_assert!(entry.metrics.average_complexity <= max.average_complexity);
            prop_assert!(entry.metrics.entity_count as f64 <= max.entities);
        }
    }
}
