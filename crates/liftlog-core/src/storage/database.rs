//! SQLite-based record storage.
//!
//! Provides persistent storage for:
//! - Workout sets and the exercise catalog
//! - Diet entries and daily body weight
//! - Free-form notes

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use super::{data_dir, migrations, RecordStore};
use crate::analytics::DateRange;
use crate::error::{DatabaseError, Result};
use crate::records::{DietEntry, MealType, NewDietEntry, Note, NoteSummary, SetEntry, WorkoutSet};

const DATE_FORMAT: &str = "%Y-%m-%d";

type DbResult<T> = std::result::Result<T, DatabaseError>;

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Read a `YYYY-MM-DD` text column.
fn date_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn meal_type_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<MealType> {
    let raw: String = row.get(idx)?;
    raw.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Build a WorkoutSet from `date, exercise, set_num, weight, reps`.
fn row_to_workout_set(row: &rusqlite::Row) -> rusqlite::Result<WorkoutSet> {
    Ok(WorkoutSet {
        date: date_column(row, 0)?,
        exercise: row.get(1)?,
        set_number: row.get(2)?,
        weight: row.get(3)?,
        reps: row.get(4)?,
    })
}

fn row_to_diet_entry(row: &rusqlite::Row) -> rusqlite::Result<DietEntry> {
    Ok(DietEntry {
        id: row.get(0)?,
        date: date_column(row, 1)?,
        meal_type: meal_type_column(row, 2)?,
        food_name: row.get(3)?,
        calories: row.get(4)?,
        carbs: row.get(5)?,
        protein: row.get(6)?,
        fat: row.get(7)?,
    })
}

/// SQLite database holding every LiftLog table.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `<data_dir>/liftlog.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created or the
    /// database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("liftlog.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open (or create) the database file at `path`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened database");
        Self::with_connection(conn)
    }

    /// Open an in-memory database.
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created.
    pub fn open_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> DbResult<Self> {
        migrations::migrate(&conn).map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(Self { conn })
    }

    // === Workout log ===

    /// Store one set exactly as given.
    pub fn insert_set(&self, set: &WorkoutSet) -> DbResult<i64> {
        self.conn.execute(
            "INSERT INTO workout_records (date, exercise, set_num, weight, reps)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                format_date(set.date),
                set.exercise,
                set.set_number,
                set.weight,
                set.reps,
            ],
        )?;
        tracing::debug!(exercise = %set.exercise, date = %set.date, set = set.set_number, "inserted set");
        Ok(self.conn.last_insert_rowid())
    }

    /// Store a block of sets for one exercise, numbering them after the
    /// highest set already logged for that exercise on `date`.
    ///
    /// All sets are written in one transaction.
    pub fn log_sets(
        &self,
        date: NaiveDate,
        exercise: &str,
        entries: &[SetEntry],
    ) -> DbResult<Vec<WorkoutSet>> {
        let tx = self.conn.unchecked_transaction()?;
        let date_str = format_date(date);

        let last: u32 = tx.query_row(
            "SELECT COALESCE(MAX(set_num), 0) FROM workout_records
             WHERE date = ?1 AND exercise = ?2",
            params![date_str, exercise],
            |row| row.get(0),
        )?;

        let mut saved = Vec::with_capacity(entries.len());
        for (offset, entry) in (1u32..).zip(entries) {
            let set = WorkoutSet::new(date, exercise, last + offset, entry.weight, entry.reps);
            tx.execute(
                "INSERT INTO workout_records (date, exercise, set_num, weight, reps)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![date_str, exercise, set.set_number, set.weight, set.reps],
            )?;
            saved.push(set);
        }
        tx.commit()?;

        tracing::debug!(exercise, %date, count = saved.len(), "logged sets");
        Ok(saved)
    }

    /// All sets logged on `date`, ordered by exercise then set number.
    pub fn sets_on(&self, date: NaiveDate) -> DbResult<Vec<WorkoutSet>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, exercise, set_num, weight, reps
             FROM workout_records
             WHERE date = ?1
             ORDER BY exercise, set_num",
        )?;
        let sets = stmt
            .query_map(params![format_date(date)], row_to_workout_set)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(sets)
    }

    /// Remove every set of `exercise` on `date`. Returns the number removed.
    pub fn delete_exercise_sets(&self, date: NaiveDate, exercise: &str) -> DbResult<usize> {
        let removed = self.conn.execute(
            "DELETE FROM workout_records WHERE date = ?1 AND exercise = ?2",
            params![format_date(date), exercise],
        )?;
        tracing::debug!(exercise, %date, removed, "deleted sets");
        Ok(removed)
    }

    // === Exercise catalog ===

    /// Add an exercise name. Returns `false` if it already existed.
    pub fn add_exercise(&self, name: &str) -> DbResult<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO exercises (name) VALUES (?1)",
            params![name],
        )?;
        Ok(inserted == 1)
    }

    /// Exercise names in the order they were added.
    pub fn list_exercises(&self) -> DbResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM exercises ORDER BY id")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    /// Remove an exercise from the catalog. Logged sets are kept.
    pub fn delete_exercise(&self, name: &str) -> DbResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM exercises WHERE name = ?1", params![name])?;
        Ok(removed > 0)
    }

    // === Notes ===

    /// Insert a note, or overwrite note `id` when given. Returns the note id.
    pub fn save_note(&self, title: &str, content: &str, id: Option<i64>) -> DbResult<i64> {
        match id {
            Some(id) => {
                let updated = self.conn.execute(
                    "UPDATE notes SET title = ?1, content = ?2 WHERE id = ?3",
                    params![title, content, id],
                )?;
                if updated == 0 {
                    return Err(DatabaseError::QueryFailed(format!("note {id} not found")));
                }
                Ok(id)
            }
            None => {
                self.conn.execute(
                    "INSERT INTO notes (title, content) VALUES (?1, ?2)",
                    params![title, content],
                )?;
                Ok(self.conn.last_insert_rowid())
            }
        }
    }

    /// Note ids and titles, newest first.
    pub fn list_notes(&self) -> DbResult<Vec<NoteSummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title FROM notes ORDER BY id DESC")?;
        let notes = stmt
            .query_map([], |row| {
                Ok(NoteSummary {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    pub fn get_note(&self, id: i64) -> DbResult<Option<Note>> {
        let note = self
            .conn
            .query_row(
                "SELECT id, title, content FROM notes WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Note {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        content: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(note)
    }

    pub fn delete_note(&self, id: i64) -> DbResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    // === Diet ===

    pub fn insert_diet(&self, entry: &NewDietEntry) -> DbResult<i64> {
        self.conn.execute(
            "INSERT INTO diet_records (date, meal_type, food_name, calories, carbs, protein, fat)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                format_date(entry.date),
                entry.meal_type.as_str(),
                entry.food_name,
                entry.calories,
                entry.carbs,
                entry.protein,
                entry.fat,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Diet entries for `date` in the order they were logged.
    pub fn diet_on(&self, date: NaiveDate) -> DbResult<Vec<DietEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, meal_type, food_name, calories, carbs, protein, fat
             FROM diet_records
             WHERE date = ?1
             ORDER BY id",
        )?;
        let entries = stmt
            .query_map(params![format_date(date)], row_to_diet_entry)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    pub fn delete_diet(&self, id: i64) -> DbResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM diet_records WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    // === Body weight ===

    /// Record body weight for `date`, replacing any earlier value.
    pub fn save_body_weight(&self, date: NaiveDate, weight: f64) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO body_weight (date, weight) VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET weight = excluded.weight",
            params![format_date(date), weight],
        )?;
        Ok(())
    }

    pub fn body_weight_on(&self, date: NaiveDate) -> DbResult<Option<f64>> {
        let weight = self
            .conn
            .query_row(
                "SELECT weight FROM body_weight WHERE date = ?1",
                params![format_date(date)],
                |row| row.get(0),
            )
            .optional()?;
        Ok(weight)
    }
}

impl RecordStore for Database {
    fn fetch_sets(&self, exercise: &str, range: &DateRange) -> DbResult<Vec<WorkoutSet>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, exercise, set_num, weight, reps
             FROM workout_records
             WHERE exercise = ?1 AND date >= ?2 AND date <= ?3",
        )?;
        let sets = stmt
            .query_map(
                params![exercise, format_date(range.start()), format_date(range.end())],
                row_to_workout_set,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!(exercise, %range, rows = sets.len(), "fetched sets");
        Ok(sets)
    }
}
