//! Scenario tests for report assembly.

use debtboard_report::{DebtInput, ReportError, build_report};
use debtboard_settings::EngineSettings;
use debtboard_types::{FunctionMetric, MetricRecord, RiskLevel};

fn record(name: &str, complexity: f64, markers: u64) -> MetricRecord {
    MetricRecord {
        file_id: 0,
        file_name: name.into(),
        average_complexity: complexity,
        entity_count: markers,
        duplication_count: 0,
        duplicated_lines: 0,
    }
}

fn function(file: &str, name: &str, complexity: f64) -> FunctionMetric {
    FunctionMetric {
        file_name: file.into(),
        function_name: name.into(),
        complexity,
    }
}

#[test]
fn given_no_files_when_report_is_built_then_everything_is_zero_and_empty() {
    let report = build_report(&DebtInput::default(), &EngineSettings::default()).unwrap();

    assert!(report.debt.files.is_empty());
    assert_eq!(report.debt.statistics.medians.duplications, 0.0);
    assert!(report.recommendations.global.problems.is_empty());
    assert_eq!(report.recommendations.global.subject, "*");
}

#[test]
fn given_a_single_file_when_report_is_built_then_its_priority_is_one() {
    let input = DebtInput::group(vec![record("only.py", 4.0, 2)], vec![]).unwrap();
    let report = build_report(&input, &EngineSettings::default()).unwrap();

    // complexity and entities sit at their maximum, the rest are zero
    let only = &report.debt.files[0];
    assert!((only.priority - 0.70).abs() < 1e-12);
    assert_eq!(only.risk, RiskLevel::Low);
}

#[test]
fn given_two_functions_over_the_same_band_when_report_is_built_then_advice_appears_once() {
    let input = DebtInput::group(
        vec![record("abc.py", 25.0, 0)],
        vec![
            function("abc.py", "func1()", 22.0),
            function("abc.py", "func2()", 28.0),
        ],
    )
    .unwrap();
    let report = build_report(&input, &EngineSettings::default()).unwrap();

    let summary = &report.recommendations.files[0];
    assert_eq!(summary.problems.len(), 3);
    assert_eq!(summary.recommendations.len(), 1);
}

#[test]
fn given_a_function_for_an_unknown_file_when_input_is_grouped_then_it_is_rejected() {
    let err = DebtInput::group(vec![record("abc.py", 1.0, 0)], vec![function("xyz.py", "f()", 1.0)])
        .unwrap_err();

    assert!(matches!(err, ReportError::UnknownFile { ref file, .. } if file == "xyz.py"));
}

#[test]
fn given_a_duplicated_file_when_report_is_built_then_no_report_is_returned() {
    let input = DebtInput::group(vec![record("abc.py", 1.0, 0), record("abc.py", 2.0, 0)], vec![])
        .unwrap();

    let err = build_report(&input, &EngineSettings::default()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "File 'abc.py' appears more than once in the metric records"
    );
}

#[test]
fn given_infinite_complexity_when_report_is_built_then_the_field_is_named() {
    let input = DebtInput::group(vec![record("abc.py", f64::INFINITY, 0)], vec![]).unwrap();

    let err = build_report(&input, &EngineSettings::default()).unwrap_err();

    assert!(matches!(err, ReportError::InvalidMetric { ref field, .. } if field == "average_complexity"));
}
