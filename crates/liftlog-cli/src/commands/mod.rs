pub mod config;
pub mod diet;
pub mod exercise;
pub mod note;
pub mod trend;
pub mod weight;
pub mod workout;

use chrono::NaiveDate;

/// Local calendar date, used when `--date` is omitted.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
