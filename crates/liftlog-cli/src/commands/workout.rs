//! Workout log commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use liftlog_core::records::group_by_exercise;
use liftlog_core::{Database, SetEntry, WorkoutSet};

use super::today;

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Log sets of one exercise, numbered after any already logged that day
    Add {
        /// Exercise name
        exercise: String,
        /// Sets as WEIGHTxREPS, e.g. 100x5 100x5 95x6
        #[arg(required = true)]
        sets: Vec<SetEntry>,
        /// Day of the workout (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the sets logged on a day
    Show {
        /// Day to show (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Delete every set of an exercise on a day
    Delete {
        /// Exercise name
        exercise: String,
        /// Day to delete from (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: WorkoutAction, db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        WorkoutAction::Add {
            exercise,
            sets,
            date,
        } => {
            let date = date.unwrap_or_else(today);
            let exercise = exercise.trim();
            for entry in &sets {
                WorkoutSet::new(date, exercise, 1, entry.weight, entry.reps).validate()?;
            }
            if db.add_exercise(exercise)? {
                println!("Added '{exercise}' to the exercise list");
            }
            let saved = db.log_sets(date, exercise, &sets)?;
            for set in &saved {
                println!(
                    "Saved {} set {}: {}kg x {}",
                    set.exercise, set.set_number, set.weight, set.reps
                );
            }
        }
        WorkoutAction::Show { date, json } => {
            let date = date.unwrap_or_else(today);
            let sets = db.sets_on(date)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&group_by_exercise(&sets))?);
            } else if sets.is_empty() {
                println!("No workout logged on {date}.");
            } else {
                println!("{date}");
                for log in group_by_exercise(&sets) {
                    println!("  {} (volume {}kg)", log.exercise, log.total_volume());
                    for set in &log.sets {
                        println!("    - set {}: {}kg x {}", set.set_number, set.weight, set.reps);
                    }
                }
            }
        }
        WorkoutAction::Delete { exercise, date } => {
            let date = date.unwrap_or_else(today);
            let exercise = exercise.trim();
            let removed = db.delete_exercise_sets(date, exercise)?;
            println!("Deleted {removed} set(s) of {exercise} on {date}");
        }
    }
    Ok(())
}
