//! Property tests for trend aggregation.
//!
//! Checks the guarantees callers rely on for charting: one point per
//! distinct date, ascending dates, order independence and exact
//! volume / best-estimate semantics.

use std::collections::{BTreeSet, HashMap};

use chrono::{Days, NaiveDate};
use liftlog_core::{estimate_one_rep_max, TrendAggregator, WorkoutSet};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn arb_sets() -> impl Strategy<Value = Vec<WorkoutSet>> {
    prop::collection::vec((0u64..45, 0.0f64..300.0, 1u32..60), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (offset, weight, reps))| {
                let date = base_date().checked_add_days(Days::new(offset)).unwrap();
                WorkoutSet::new(date, "Deadlift", i as u32 + 1, weight, reps)
            })
            .collect()
    })
}

fn arb_sets_and_shuffle() -> impl Strategy<Value = (Vec<WorkoutSet>, Vec<WorkoutSet>)> {
    arb_sets().prop_flat_map(|sets| (Just(sets.clone()), Just(sets).prop_shuffle()))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn one_point_per_distinct_date(sets in arb_sets()) {
        let points = TrendAggregator::new().aggregate(&sets);
        let distinct: BTreeSet<NaiveDate> = sets.iter().map(|s| s.date).collect();
        prop_assert_eq!(points.len(), distinct.len());
    }

    #[test]
    fn dates_strictly_increase(sets in arb_sets()) {
        let points = TrendAggregator::new().aggregate(&sets);
        for pair in points.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn shuffled_input_gives_identical_output((sets, shuffled) in arb_sets_and_shuffle()) {
        let aggregator = TrendAggregator::new();
        let first = aggregator.aggregate(&sets);
        let again = aggregator.aggregate(&sets);
        let from_shuffled = aggregator.aggregate(&shuffled);
        prop_assert_eq!(&first, &again);
        prop_assert_eq!(&first, &from_shuffled);
    }

    #[test]
    fn volume_matches_naive_sum(sets in arb_sets()) {
        let mut expected: HashMap<NaiveDate, f64> = HashMap::new();
        for set in &sets {
            *expected.entry(set.date).or_default() += set.weight * f64::from(set.reps);
        }

        for point in TrendAggregator::new().aggregate(&sets) {
            prop_assert!(close(point.total_volume, expected[&point.date]));
        }
    }

    #[test]
    fn best_estimate_bounds_every_set_and_is_one_of_them(sets in arb_sets()) {
        for point in TrendAggregator::new().aggregate(&sets) {
            let estimates: Vec<f64> = sets
                .iter()
                .filter(|s| s.date == point.date)
                .map(|s| estimate_one_rep_max(s.weight, s.reps))
                .collect();
            prop_assert!(estimates.iter().all(|e| *e <= point.best_estimated_1rm));
            prop_assert!(estimates.iter().any(|e| *e == point.best_estimated_1rm));
        }
    }

    #[test]
    fn strict_mode_accepts_valid_sets(sets in arb_sets()) {
        let lenient = TrendAggregator::new().aggregate(&sets);
        let strict = TrendAggregator::strict().aggregate_checked(&sets).unwrap();
        prop_assert_eq!(lenient, strict);
    }
}
