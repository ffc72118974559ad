//! Per-day training volume and estimated one-rep-max trends
//!
//! Turns logged sets for one exercise into a date-ordered series suitable
//! for charting. For each distinct date in the input:
//! - **Total volume**: sum of `weight * reps` over the day's sets
//! - **Best estimated 1RM**: highest Epley estimate
//!   `weight * (1 + reps / 30)` among the day's sets
//!
//! Dates with no sets produce no point; gaps are not zero-filled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analytics::period::DateRange;
use crate::error::{Result, ValidationError};
use crate::records::WorkoutSet;
use crate::storage::RecordStore;

/// Rep divisor of the Epley estimate.
pub const EPLEY_REP_DIVISOR: f64 = 30.0;

/// Estimated one-rep max for `weight` lifted `reps` times.
///
/// Defined for every rep count; above 30 reps the multiplier exceeds 2x and
/// the estimate stops being physiologically meaningful, but it is still
/// returned as computed.
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    weight * (1.0 + f64::from(reps) / EPLEY_REP_DIVISOR)
}

/// Aggregated training for one exercise on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTrendPoint {
    pub date: NaiveDate,
    pub total_volume: f64,
    pub best_estimated_1rm: f64,
}

impl DailyTrendPoint {
    /// Axis label in `MM-DD` form.
    pub fn chart_label(&self) -> String {
        self.date.format("%m-%d").to_string()
    }

    /// Best estimate rounded to one decimal place, as shown on charts.
    pub fn rounded_1rm(&self) -> f64 {
        (self.best_estimated_1rm * 10.0).round() / 10.0
    }
}

/// Groups sets by date and computes a [`DailyTrendPoint`] per date.
///
/// Stateless; a single aggregator can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendAggregator {
    /// Reject invalid sets instead of aggregating them as-is
    pub strict: bool,
}

impl TrendAggregator {
    /// Aggregator that accepts any input, matching the logger's historical
    /// behaviour.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregator whose [`aggregate_checked`](Self::aggregate_checked)
    /// rejects negative weights, zero reps and blank exercise names.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Aggregate sets into one point per distinct date, ascending by date.
    ///
    /// The result does not depend on the order of `sets`: per-day volumes
    /// are summed in a canonical order so shuffled input yields bitwise
    /// identical output.
    pub fn aggregate<'a, I>(&self, sets: I) -> Vec<DailyTrendPoint>
    where
        I: IntoIterator<Item = &'a WorkoutSet>,
    {
        let mut by_date: BTreeMap<NaiveDate, DayBuilder> = BTreeMap::new();

        for set in sets {
            by_date
                .entry(set.date)
                .or_insert_with(DayBuilder::new)
                .record(set);
        }

        by_date
            .into_iter()
            .map(|(date, builder)| builder.build(date))
            .collect()
    }

    /// Like [`aggregate`](Self::aggregate), but validates every set first
    /// when the aggregator is strict.
    ///
    /// # Errors
    /// Returns the first `ValidationError` found; nothing is aggregated in
    /// that case.
    pub fn aggregate_checked(
        &self,
        sets: &[WorkoutSet],
    ) -> std::result::Result<Vec<DailyTrendPoint>, ValidationError> {
        if self.strict {
            sets.iter().try_for_each(WorkoutSet::validate)?;
        }
        Ok(self.aggregate(sets))
    }
}

/// Running totals for one date.
struct DayBuilder {
    volumes: Vec<f64>,
    best: Option<f64>,
}

impl DayBuilder {
    fn new() -> Self {
        Self {
            volumes: Vec::new(),
            best: None,
        }
    }

    fn record(&mut self, set: &WorkoutSet) {
        self.volumes.push(set.volume());
        // -0.0 folds to 0.0; f64::max leaves the sign of equal zeros order-dependent.
        let estimate = estimate_one_rep_max(set.weight, set.reps) + 0.0;
        self.best = Some(match self.best {
            Some(best) => best.max(estimate),
            None => estimate,
        });
    }

    fn build(mut self, date: NaiveDate) -> DailyTrendPoint {
        self.volumes.sort_by(f64::total_cmp);
        DailyTrendPoint {
            date,
            total_volume: self.volumes.iter().sum(),
            best_estimated_1rm: self.best.unwrap_or(0.0),
        }
    }
}

/// Trend series for one exercise over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub exercise: String,
    pub range: DateRange,
    pub points: Vec<DailyTrendPoint>,
}

impl TrendReport {
    /// No sets were logged for the exercise in range. Not an error.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_volume(&self) -> Option<f64> {
        self.points.iter().map(|p| p.total_volume).reduce(f64::max)
    }

    pub fn max_1rm(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.best_estimated_1rm)
            .reduce(f64::max)
    }
}

/// Fetch sets for `exercise` in `range` from `store` and aggregate them.
///
/// # Errors
/// Returns an error if the store query fails, or if `aggregator` is strict
/// and a stored set is invalid.
pub fn exercise_trend<S>(
    store: &S,
    aggregator: &TrendAggregator,
    exercise: &str,
    range: DateRange,
) -> Result<TrendReport>
where
    S: RecordStore + ?Sized,
{
    let sets = store.fetch_sets(exercise, &range)?;
    tracing::debug!(exercise, %range, sets = sets.len(), "aggregating trend");
    let points = aggregator.aggregate_checked(&sets)?;
    Ok(TrendReport {
        exercise: exercise.to_string(),
        range,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DatabaseError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn set(date: NaiveDate, weight: f64, reps: u32) -> WorkoutSet {
        WorkoutSet::new(date, "Squat", 1, weight, reps)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_estimate_uses_divisor_thirty() {
        assert_close(estimate_one_rep_max(100.0, 5), 100.0 * (1.0 + 5.0 / 30.0));
        assert_close(estimate_one_rep_max(60.0, 30), 120.0);
    }

    #[test]
    fn test_estimate_with_high_reps_is_still_defined() {
        let estimate = estimate_one_rep_max(50.0, 100);
        assert!(estimate.is_finite());
        assert!(estimate > 100.0);
    }

    #[test]
    fn test_single_set() {
        let points = TrendAggregator::new().aggregate(&[set(date(2024, 1, 1), 100.0, 5)]);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, date(2024, 1, 1));
        assert_close(points[0].total_volume, 500.0);
        assert_close(points[0].best_estimated_1rm, 116.666_666_666_666_67);
    }

    #[test]
    fn test_two_sets_same_day() {
        let day = date(2024, 1, 1);
        let points = TrendAggregator::new().aggregate(&[set(day, 100.0, 5), set(day, 80.0, 10)]);

        assert_eq!(points.len(), 1);
        assert_close(points[0].total_volume, 1300.0);
        assert_close(points[0].best_estimated_1rm, 100.0 * (1.0 + 5.0 / 30.0));
    }

    #[test]
    fn test_out_of_order_dates_are_sorted() {
        let sets = vec![
            set(date(2024, 1, 8), 105.0, 5),
            set(date(2024, 1, 1), 100.0, 5),
        ];
        let points = TrendAggregator::new().aggregate(&sets);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, date(2024, 1, 1));
        assert_eq!(points[1].date, date(2024, 1, 8));
    }

    #[test]
    fn test_empty_input() {
        let sets: Vec<WorkoutSet> = Vec::new();
        assert!(TrendAggregator::new().aggregate(&sets).is_empty());
    }

    #[test]
    fn test_all_zero_weights() {
        let day = date(2024, 1, 1);
        let points = TrendAggregator::new().aggregate(&[set(day, 0.0, 10), set(day, 0.0, 12)]);

        assert_eq!(points[0].total_volume, 0.0);
        assert_eq!(points[0].best_estimated_1rm, 0.0);
    }

    #[test]
    fn test_signed_zero_weights_are_order_independent() {
        let d = date(2024, 1, 1);
        let forward = [set(d, 0.0, 5), set(d, -0.0, 5)];
        let reversed = [set(d, -0.0, 5), set(d, 0.0, 5)];

        let a = TrendAggregator::new().aggregate(&forward);
        let b = TrendAggregator::new().aggregate(&reversed);
        assert_eq!(a[0].best_estimated_1rm.to_bits(), b[0].best_estimated_1rm.to_bits());
        assert_eq!(a[0].total_volume.to_bits(), b[0].total_volume.to_bits());
        assert_eq!(a[0].best_estimated_1rm.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_gaps_are_not_filled() {
        let sets = vec![set(date(2024, 1, 1), 100.0, 5), set(date(2024, 1, 30), 100.0, 5)];
        assert_eq!(TrendAggregator::new().aggregate(&sets).len(), 2);
    }

    #[test]
    fn test_lenient_aggregator_accepts_invalid_sets() {
        let day = date(2024, 1, 1);
        let sets = vec![set(day, -10.0, 5)];
        let points = TrendAggregator::new().aggregate_checked(&sets).unwrap();
        assert_close(points[0].total_volume, -50.0);
    }

    #[test]
    fn test_strict_aggregator_rejects_zero_reps() {
        let day = date(2024, 1, 1);
        let sets = vec![set(day, 100.0, 5), set(day, 100.0, 0)];
        let err = TrendAggregator::strict().aggregate_checked(&sets).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "reps"));
    }

    #[test]
    fn test_chart_label_and_rounding() {
        let point = DailyTrendPoint {
            date: date(2024, 3, 7),
            total_volume: 500.0,
            best_estimated_1rm: 116.666_666,
        };
        assert_eq!(point.chart_label(), "03-07");
        assert_eq!(point.rounded_1rm(), 116.7);
    }

    struct FixedStore(Vec<WorkoutSet>);

    impl RecordStore for FixedStore {
        fn fetch_sets(
            &self,
            exercise: &str,
            range: &DateRange,
        ) -> std::result::Result<Vec<WorkoutSet>, DatabaseError> {
            Ok(self
                .0
                .iter()
                .filter(|s| s.exercise == exercise && range.contains(s.date))
                .cloned()
                .collect())
        }
    }

    #[test]
    fn test_exercise_trend_chains_store_and_aggregator() {
        let store = FixedStore(vec![
            WorkoutSet::new(date(2024, 1, 1), "Squat", 1, 100.0, 5),
            WorkoutSet::new(date(2024, 1, 1), "Bench", 1, 70.0, 5),
            WorkoutSet::new(date(2024, 2, 15), "Squat", 1, 110.0, 5),
        ]);
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();

        let report = exercise_trend(&store, &TrendAggregator::new(), "Squat", range).unwrap();

        assert_eq!(report.exercise, "Squat");
        assert_eq!(report.points.len(), 1);
        assert_close(report.points[0].total_volume, 500.0);
        assert_eq!(report.max_volume(), Some(500.0));
    }

    #[test]
    fn test_exercise_trend_empty_range_is_not_an_error() {
        let store = FixedStore(Vec::new());
        let range = DateRange::day(date(2024, 1, 1));
        let report = exercise_trend(&store, &TrendAggregator::new(), "Squat", range).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.max_1rm(), None);
    }
}
