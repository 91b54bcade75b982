//! Property-based tests for `debtboard-priority`.

use proptest::prelude::*;

use debtboard_priority::{ratios, score};
use debtboard_settings::PriorityWeights;
use debtboard_stats::maximums;
use debtboard_types::{Dimension, MetricRecord};

fn arb_record() -> impl Strategy<Value = MetricRecord> {
    (0.0f64..120.0, 0..50u64, 0..100u64, 0..2000u64).prop_map(|(c, e, d, l)| MetricRecord {
        file_id: 0,
        file_name: "f.py".into(),
        average_complexity: c,
        entity_count: e,
        duplication_count: d,
        duplicated_lines: l,
    })
}

proptest! {
    #[test]
    fn prop_score_is_within_unit_interval(records in proptest::collection::vec(arb_record(), 1..30)) {
        let max = maximums(&records);
        for r in &records {
            let s = score(r, &max, &PriorityWeights::default());
            prop_assert!(s >= 0.0);
            prop_assert!(s <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn prop_ratios_are_within_unit_interval(records in proptest::collection::vec(arb_record(), 1..30)) {
        let max = maximums(&records);
        for r in &records {
            let got = ratios(r, &max);
            for d in Dimension::ALL {
                prop_assert!((0.0..=1.0).contains(&got.get(d)));
            }
        }
    }
}
