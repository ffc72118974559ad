//! Diet tracker commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use liftlog_core::{Config, Database, MealType, NewDietEntry, NutritionSummary};

use super::today;

#[derive(Subcommand)]
pub enum DietAction {
    /// Record a food entry
    Add {
        /// Food name
        food: String,
        /// Meal: breakfast, lunch, dinner, snack or supplement
        #[arg(long, short)]
        meal: MealType,
        /// Energy in kcal
        #[arg(long, default_value_t = 0.0)]
        calories: f64,
        /// Carbohydrates in grams
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,
        /// Protein in grams
        #[arg(long, default_value_t = 0.0)]
        protein: f64,
        /// Fat in grams
        #[arg(long, default_value_t = 0.0)]
        fat: f64,
        /// Day eaten (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show a day's entries and progress against goals
    Show {
        /// Day to show (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Delete an entry by id
    Delete {
        /// Entry id
        id: i64,
    },
}

pub fn run(
    action: DietAction,
    db: &Database,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DietAction::Add {
            food,
            meal,
            calories,
            carbs,
            protein,
            fat,
            date,
        } => {
            let entry = NewDietEntry {
                date: date.unwrap_or_else(today),
                meal_type: meal,
                food_name: food,
                calories,
                carbs,
                protein,
                fat,
            };
            entry.validate()?;
            let id = db.insert_diet(&entry)?;
            println!("Saved {} ({}) as #{id}", entry.food_name, entry.meal_type);
        }
        DietAction::Show { date, json } => {
            let date = date.unwrap_or_else(today);
            let entries = db.diet_on(date)?;
            let summary = NutritionSummary::from_entries(date, &entries, &config.diet);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }

            println!("{date}");
            for meal in MealType::ALL {
                let items: Vec<_> = entries.iter().filter(|e| e.meal_type == meal).collect();
                if items.is_empty() {
                    continue;
                }
                println!("  {meal}");
                for e in items {
                    println!(
                        "    #{} {}: {}kcal C{}g P{}g F{}g",
                        e.id, e.food_name, e.calories, e.carbs, e.protein, e.fat
                    );
                }
            }
            let t = &summary.totals;
            let g = &summary.goals;
            let p = &summary.progress;
            println!("  calories {:>7.1} / {:>6.0}  {:>3}%", t.calories, g.calories, p.calories);
            println!("  carbs    {:>7.1} / {:>6.0}  {:>3}%", t.carbs, g.carbs, p.carbs);
            println!("  protein  {:>7.1} / {:>6.0}  {:>3}%", t.protein, g.protein, p.protein);
            println!("  fat      {:>7.1} / {:>6.0}  {:>3}%", t.fat, g.fat, p.fat);
        }
        DietAction::Delete { id } => {
            if db.delete_diet(id)? {
                println!("Deleted diet entry #{id}");
            } else {
                return Err(format!("no diet entry #{id}").into());
            }
        }
    }
    Ok(())
}
