//! Daily macro totals and progress against nutrition goals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::{DietEntry, MealType};

/// Daily intake targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    #[serde(default = "default_calories")]
    pub calories: f64,
    #[serde(default = "default_carbs")]
    pub carbs: f64,
    #[serde(default = "default_protein")]
    pub protein: f64,
    #[serde(default = "default_fat")]
    pub fat: f64,
}

fn default_calories() -> f64 {
    2500.0
}
fn default_carbs() -> f64 {
    300.0
}
fn default_protein() -> f64 {
    150.0
}
fn default_fat() -> f64 {
    70.0
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: default_calories(),
            carbs: default_carbs(),
            protein: default_protein(),
            fat: default_fat(),
        }
    }
}

/// Summed intake for a set of diet entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

/// Percent of each goal reached, capped at 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub calories: u8,
    pub carbs: u8,
    pub protein: u8,
    pub fat: u8,
}

/// Intake for one day, with per-meal subtotals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub date: NaiveDate,
    pub entries: usize,
    pub totals: MacroTotals,
    pub by_meal: Vec<(MealType, MacroTotals)>,
    pub goals: NutritionGoals,
    pub progress: GoalProgress,
}

impl NutritionSummary {
    pub fn from_entries(date: NaiveDate, entries: &[DietEntry], goals: &NutritionGoals) -> Self {
        let mut totals = MacroTotals::default();
        let mut by_meal: Vec<(MealType, MacroTotals)> = Vec::new();

        for entry in entries {
            totals.add(entry);
            match by_meal.iter_mut().find(|(meal, _)| *meal == entry.meal_type) {
                Some((_, subtotal)) => subtotal.add(entry),
                None => {
                    let mut subtotal = MacroTotals::default();
                    subtotal.add(entry);
                    by_meal.push((entry.meal_type, subtotal));
                }
            }
        }
        by_meal.sort_by_key(|(meal, _)| MealType::ALL.iter().position(|m| m == meal));

        let progress = GoalProgress {
            calories: percent_of(totals.calories, goals.calories),
            carbs: percent_of(totals.carbs, goals.carbs),
            protein: percent_of(totals.protein, goals.protein),
            fat: percent_of(totals.fat, goals.fat),
        };

        Self {
            date,
            entries: entries.len(),
            totals,
            by_meal,
            goals: *goals,
            progress,
        }
    }
}

impl MacroTotals {
    fn add(&mut self, entry: &DietEntry) {
        self.calories += entry.calories;
        self.carbs += entry.carbs;
        self.protein += entry.protein;
        self.fat += entry.fat;
    }
}

/// `floor(min(100, total / goal * 100))`; a non-positive goal counts as 0%.
fn percent_of(total: f64, goal: f64) -> u8 {
    if goal <= 0.0 || !total.is_finite() {
        return 0;
    }
    (total / goal * 100.0).clamp(0.0, 100.0).floor() as u8
}
