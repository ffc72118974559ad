//! # LiftLog Core Library
//!
//! This library provides the core logic for LiftLog, a personal workout,
//! diet and notes logger. All operations are exposed through the `liftlog`
//! CLI binary; any other front-end is expected to be a thin layer over the
//! same library.
//!
//! ## Architecture
//!
//! - **Records**: Plain value types for workout sets, diet entries and notes
//! - **Storage**: SQLite record store and TOML-based configuration
//! - **Analytics**: Per-day volume / estimated 1RM trends, nutrition
//!   summaries and analysis periods
//!
//! ## Key Components
//!
//! - [`TrendAggregator`]: Groups sets by day into a chartable trend series
//! - [`Database`]: Record persistence, implementing [`RecordStore`]
//! - [`Config`]: Application configuration management

pub mod analytics;
pub mod error;
pub mod records;
pub mod storage;

pub use analytics::{
    estimate_one_rep_max, exercise_trend, DailyTrendPoint, DateRange, NutritionGoals,
    NutritionSummary, Period, TrendAggregator, TrendReport,
};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use records::{DietEntry, MealType, NewDietEntry, Note, NoteSummary, SetEntry, WorkoutSet};
pub use storage::{Config, Database, RecordStore};
