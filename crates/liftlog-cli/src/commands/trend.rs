//! Exercise trend command for CLI.

use chrono::NaiveDate;
use clap::Args;
use liftlog_core::analytics::all_time_start;
use liftlog_core::{
    exercise_trend, Config, Database, DateRange, Period, TrendAggregator, TrendReport,
    ValidationError,
};

use super::today;

const BAR_WIDTH: usize = 30;

#[derive(Args)]
pub struct TrendArgs {
    /// Exercise name (exact match)
    pub exercise: String,
    /// Look-back window: week, month, three_months, all (default from config)
    #[arg(long, short)]
    pub period: Option<Period>,
    /// First day of a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last day of a custom range (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
    /// Fail on invalid stored sets instead of including them
    #[arg(long)]
    pub strict: bool,
}

/// Pick the date range for a trend query.
///
/// Explicit `from`/`to` bounds take precedence over any period; a missing
/// lower bound means all time and a missing upper bound means `today`.
/// Without bounds the period is resolved, and `custom` alone is an error.
pub fn resolve_range(
    period: Period,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<DateRange, ValidationError> {
    if from.is_some() || to.is_some() {
        let end = to.unwrap_or(today);
        let start = from.unwrap_or_else(|| all_time_start().min(end));
        return DateRange::new(start, end);
    }
    period.resolve(today).ok_or_else(|| ValidationError::InvalidValue {
        field: "period".into(),
        message: "custom period needs --from and/or --to".into(),
    })
}

pub fn run(
    args: TrendArgs,
    db: &Database,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let period = args.period.unwrap_or(config.analysis.default_period);
    let range = resolve_range(period, args.from, args.to, today())?;
    let aggregator = if args.strict {
        TrendAggregator::strict()
    } else {
        config.trend_aggregator()
    };

    let report = exercise_trend(db, &aggregator, args.exercise.trim(), range)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    if report.is_empty() {
        println!("No records for {} in {}.", report.exercise, report.range);
        return Ok(());
    }
    print_table(&report);
    Ok(())
}

fn print_table(report: &TrendReport) {
    println!("{} ({})", report.exercise, report.range);
    println!("{:<6} {:>10} {:>8}", "date", "volume", "e1RM");
    let max_volume = report.max_volume().unwrap_or(0.0);
    for point in &report.points {
        let bar = if max_volume > 0.0 {
            let len = (point.total_volume / max_volume * BAR_WIDTH as f64).round();
            "#".repeat(len.max(0.0) as usize)
        } else {
            String::new()
        };
        println!(
            "{:<6} {:>10.1} {:>8.1} {bar}",
            point.chart_label(),
            point.total_volume,
            point.rounded_1rm()
        );
    }
    if let Some(best) = report.max_1rm() {
        println!("Best estimated 1RM: {:.1}kg", best);
    }
}
