//! Exercise catalog commands for CLI.

use clap::Subcommand;
use liftlog_core::{Database, ValidationError};

#[derive(Subcommand)]
pub enum ExerciseAction {
    /// Add an exercise
    Add {
        /// Exercise name
        name: String,
    },
    /// List exercises in the order they were added
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Remove an exercise from the list (logged sets are kept)
    Delete {
        /// Exercise name
        name: String,
    },
}

pub fn run(action: ExerciseAction, db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ExerciseAction::Add { name } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(ValidationError::EmptyField("name".into()).into());
            }
            if db.add_exercise(name)? {
                println!("Added exercise: {name}");
            } else {
                println!("Exercise already exists: {name}");
            }
        }
        ExerciseAction::List { json } => {
            let names = db.list_exercises()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for name in names {
                    println!("{name}");
                }
            }
        }
        ExerciseAction::Delete { name } => {
            if db.delete_exercise(&name)? {
                println!("Deleted exercise: {name}");
            } else {
                println!("No such exercise: {name}");
            }
        }
    }
    Ok(())
}
