//! End-to-end report assembly over a recorded commit snapshot.

use std::path::PathBuf;

use debtboard_report::{DebtInput, ReportError, build_report};
use debtboard_settings::EngineSettings;
use debtboard_types::{DebtReport, RiskLevel};

fn fixture() -> DebtInput {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/commit.json");
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn report() -> DebtReport {
    build_report(&fixture(), &EngineSettings::default()).unwrap()
}

#[test]
fn statistics_match_the_recorded_commit() {
    let stats = report().debt.statistics;
    assert_eq!(stats.maximums.average_complexity, 49.2);
    assert_eq!(stats.maximums.entities, 31.0);
    assert_eq!(stats.maximums.duplications, 80.0);
    assert_eq!(stats.maximums.duplicated_lines, 25.0);
    assert!((stats.medians.average_complexity - 39.65).abs() < 1e-9);
    assert_eq!(stats.medians.entities, 15.5);
    assert_eq!(stats.medians.duplications, 39.5);
    assert_eq!(stats.medians.duplicated_lines, 17.5);
}

#[test]
fn priority_follows_the_weighted_ratio_formula() {
    let report = report();
    let abc = report.debt.get("abc.py").unwrap();
    let expected = (32.4 / 49.2) * 0.40 + (3.0 / 31.0) * 0.30 + (50.0 / 80.0) * 0.20 + (20.0 / 25.0) * 0.10;
    assert!((abc.priority - expected).abs() < 1e-12);
}

#[test]
fn files_rank_by_priority_then_by_risk() {
    let report = report();
    let by_priority: Vec<_> = report
        .debt
        .ranked_by_priority()
        .into_iter()
        .map(|f| f.filename.as_str())
        .collect();
    assert_eq!(by_priority, ["ghi.py", "jkl.py", "abc.py", "def.py"]);

    let risks: Vec<_> = report.debt.files.iter().map(|f| f.risk).collect();
    assert_eq!(
        risks,
        [RiskLevel::High, RiskLevel::Medium, RiskLevel::High, RiskLevel::High]
    );
    assert_eq!(report.debt.ranked_by_risk().last().unwrap().filename, "def.py");
}

#[test]
fn global_rules_report_risk_duplication_and_markers() {
    let global = report().recommendations.global;
    let problems: Vec<_> = global.problems.iter().map(String::as_str).collect();
    assert_eq!(
        problems,
        [
            "4 files have at least 5 instances of code duplication. Details in the 'Duplication' section.",
            "50% of files in this commit have an average complexity ranked at or above HIGH.",
            "For a total of 4 files, 4 files contained at least one 'todo' or 'fixme'.",
        ]
    );
    assert_eq!(global.recommendations.len(), 3);
}

#[test]
fn file_summaries_collapse_shared_advice() {
    let report = report();
    let files = &report.recommendations.files;
    let counts: Vec<_> = files
        .iter()
        .map(|s| (s.subject.as_str(), s.problems.len(), s.recommendations.len()))
        .collect();
    assert_eq!(
        counts,
        [("abc.py", 3, 2), ("def.py", 1, 1), ("ghi.py", 3, 2), ("jkl.py", 1, 1)]
    );
    assert!(files[0]
        .problems
        .contains("File abc.py has complexity of function parse() ranked at or above MEDIUM."));
    assert!(files[2]
        .problems
        .contains("File ghi.py has 20 'todo' or 'fixme' markers for a total of 1 functions."));
}

#[test]
fn report_serializes_identically_across_runs() {
    let first = serde_json::to_string(&report()).unwrap();
    let second = serde_json::to_string(&report()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn broken_snapshot_is_rejected_without_a_report() {
    let mut input = fixture();
    input.functions.remove("jkl.py");
    let err = build_report(&input, &EngineSettings::default()).unwrap_err();
    assert!(matches!(err, ReportError::MissingFunctions { ref file } if file == "jkl.py"));
    assert_eq!(err.to_string(), "No function metrics were supplied for file 'jkl.py'");
}

#[test]
fn settings_from_toml_change_the_duplication_policy() {
    let settings = EngineSettings::from_toml(
        r#"
duplication_policy = "total_count"

[rules]
min_duplication_count = 500
"#,
    )
    .unwrap();
    let global = build_report(&fixture(), &settings).unwrap().recommendations.global;
    assert!(!global.problems.iter().any(|p| p.contains("duplication")));
}
