//! Record types persisted by the store: workout sets, the exercise
//! catalog, diet entries, body weight and free-form notes.

mod diet;
mod workout;

pub use diet::{DietEntry, MealType, NewDietEntry};
pub use workout::{group_by_exercise, ExerciseLog, SetEntry, WorkoutSet};

use serde::{Deserialize, Serialize};

/// A free-form note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Note listing entry (no body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: i64,
    pub title: String,
}
