//! Inclusive date ranges and the preset analysis periods.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Inclusive `[start, end]` range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// Unchecked wire form, validated through [`DateRange::new`].
#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ValidationError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// # Errors
    /// Returns `ValidationError::InvalidDateRange` when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering a single day.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.start, self.end)
    }
}

/// Earliest date the "all" preset reaches back to (2000-01-01).
pub fn all_time_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Preset look-back windows offered by the analysis view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Last 7 days.
    Week,
    /// Last calendar month.
    #[default]
    Month,
    /// Last three calendar months.
    ThreeMonths,
    /// Everything since 2000-01-01.
    All,
    /// Caller supplies both bounds.
    Custom,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::ThreeMonths => "three_months",
            Period::All => "all",
            Period::Custom => "custom",
        }
    }

    /// Resolve the preset to a concrete range ending on `today`.
    ///
    /// Returns `None` for [`Period::Custom`], which has no implied bounds.
    pub fn resolve(self, today: NaiveDate) -> Option<DateRange> {
        let start = match self {
            Period::Week => today.checked_sub_days(Days::new(7)),
            Period::Month => today.checked_sub_months(Months::new(1)),
            Period::ThreeMonths => today.checked_sub_months(Months::new(3)),
            Period::All => Some(all_time_start().min(today)),
            Period::Custom => None,
        }?;
        Some(DateRange { start, end: today })
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" | "1w" => Ok(Period::Week),
            "month" | "1m" => Ok(Period::Month),
            "three_months" | "3months" | "3m" => Ok(Period::ThreeMonths),
            "all" => Ok(Period::All),
            "custom" => Ok(Period::Custom),
            _ => Err(ValidationError::InvalidValue {
                field: "period".into(),
                message: format!("unknown period '{s}' (expected week, month, three_months, all or custom)"),
            }),
        }
    }
}
