use chrono::NaiveDate;
use clap::Subcommand;
use liftlog_core::{Database, ValidationError};

use super::today;

#[derive(Subcommand)]
pub enum WeightAction {
    /// Record body weight for a day, replacing any earlier value
    Set {
        /// Body weight in kg
        kg: f64,
        /// Day (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show body weight for a day
    Get {
        /// Day (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: WeightAction, db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        WeightAction::Set { kg, date } => {
            if !kg.is_finite() || kg <= 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: "weight".into(),
                    message: format!("must be a positive number, got {kg}"),
                }
                .into());
            }
            let date = date.unwrap_or_else(today);
            db.save_body_weight(date, kg)?;
            println!("Body weight on {date}: {kg}kg");
        }
        WeightAction::Get { date } => {
            let date = date.unwrap_or_else(today);
            match db.body_weight_on(date)? {
                Some(kg) => println!("{kg}"),
                None => println!("No body weight recorded on {date}."),
            }
        }
    }
    Ok(())
}
