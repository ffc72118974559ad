//! Logged strength-training sets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One performed set of an exercise on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub date: NaiveDate,
    pub exercise: String,
    /// 1-based position within the exercise on that day.
    pub set_number: u32,
    /// Load in kilograms.
    pub weight: f64,
    pub reps: u32,
}

impl WorkoutSet {
    pub fn new(
        date: NaiveDate,
        exercise: impl Into<String>,
        set_number: u32,
        weight: f64,
        reps: u32,
    ) -> Self {
        Self {
            date,
            exercise: exercise.into(),
            set_number,
            weight,
            reps,
        }
    }

    /// Training volume of this set (`weight * reps`).
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }

    /// Reject sets that would produce meaningless analytics.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidValue` for a negative or non-finite
    /// weight, zero reps or a zero set number, and `EmptyField` for a blank
    /// exercise name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.exercise.trim().is_empty() {
            return Err(ValidationError::EmptyField("exercise".into()));
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "weight".into(),
                message: format!("must be a non-negative number, got {}", self.weight),
            });
        }
        if self.reps == 0 {
            return Err(ValidationError::InvalidValue {
                field: "reps".into(),
                message: "must be at least 1".into(),
            });
        }
        if self.set_number == 0 {
            return Err(ValidationError::InvalidValue {
                field: "set_number".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Weight and reps for a set whose number is assigned on save.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub weight: f64,
    pub reps: u32,
}

impl std::str::FromStr for SetEntry {
    type Err = ValidationError;

    /// Parses `WEIGHTxREPS`, e.g. `100x5` or `62.5X8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidValue {
            field: "set".into(),
            message: format!("expected WEIGHTxREPS (e.g. 100x5), got '{s}'"),
        };
        let (weight, reps) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let weight: f64 = weight.trim().parse().map_err(|_| invalid())?;
        let reps: u32 = reps.trim().parse().map_err(|_| invalid())?;
        Ok(Self { weight, reps })
    }
}

/// Sets of one exercise within a day's log, in set order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub exercise: String,
    pub sets: Vec<WorkoutSet>,
}

impl ExerciseLog {
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(WorkoutSet::volume).sum()
    }
}

/// Group a day's sets by exercise, keeping the order exercises first appear.
pub fn group_by_exercise(sets: &[WorkoutSet]) -> Vec<ExerciseLog> {
    let mut logs: Vec<ExerciseLog> = Vec::new();
    for set in sets {
        match logs.iter_mut().find(|log| log.exercise == set.exercise) {
            Some(log) => log.sets.push(set.clone()),
            None => logs.push(ExerciseLog {
                exercise: set.exercise.clone(),
                sets: vec![set.clone()],
            }),
        }
    }
    logs
}
