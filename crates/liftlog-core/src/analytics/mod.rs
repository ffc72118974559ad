//! Analytics for LiftLog
//!
//! This module turns stored records into summaries for display:
//! per-day exercise trends (volume and estimated 1RM), daily nutrition
//! totals against goals, and the date-range presets both are queried with.

mod nutrition;
mod period;
mod trend;

pub use nutrition::{GoalProgress, MacroTotals, NutritionGoals, NutritionSummary};

pub use period::{all_time_start, DateRange, Period};

pub use trend::{
    estimate_one_rep_max, exercise_trend, DailyTrendPoint, TrendAggregator, TrendReport,
    EPLEY_REP_DIVISOR,
};
