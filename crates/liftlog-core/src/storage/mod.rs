mod config;
pub mod database;
pub mod migrations;

pub use config::{AnalysisConfig, Config, LoggingConfig};
pub use database::Database;

use std::path::PathBuf;

use crate::analytics::DateRange;
use crate::error::DatabaseError;
use crate::records::WorkoutSet;

/// Source of logged sets for trend queries.
///
/// Implemented by [`Database`]; analytics code takes the store as a
/// parameter rather than reaching for a shared client.
pub trait RecordStore {
    /// All sets of `exercise` (exact match) whose date lies in `range`,
    /// in no particular order.
    fn fetch_sets(&self, exercise: &str, range: &DateRange)
        -> Result<Vec<WorkoutSet>, DatabaseError>;
}

/// Returns the LiftLog data directory, creating it if needed.
///
/// `LIFTLOG_DATA_DIR` wins when set. Otherwise `~/.config/liftlog/`, or
/// `~/.config/liftlog-dev/` when `LIFTLOG_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("LIFTLOG_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("LIFTLOG_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("liftlog-dev")
            } else {
                base_dir.join("liftlog")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
