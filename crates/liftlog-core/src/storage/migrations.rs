//! Database schema migrations for liftlog.
//!
//! Migrations are versioned and applied automatically when opening the database.
//! The `schema_version` table tracks the current migration version.

use rusqlite::{Connection, Result as SqliteResult};

/// Current schema version.
///
/// Increment this when adding new migrations.
pub const SCHEMA_VERSION: i32 = 2;

/// Apply all pending migrations to bring the database to the current schema version.
///
/// # Errors
/// Returns an error if migration fails.
pub fn migrate(conn: &Connection) -> SqliteResult<()> {
    create_schema_version_table(conn)?;

    let current_version = get_schema_version(conn);

    if current_version < 1 {
        migrate_v1(conn)?;
    }
    if current_version < 2 {
        migrate_v2(conn)?;
    }

    Ok(())
}

fn create_schema_version_table(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        );",
    )
}

/// Get the current schema version from the database.
///
/// Returns 0 if no version is set (new database).
pub fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row("SELECT version FROM schema_version", [], |row| {
        row.get::<_, i32>(0)
    })
    .unwrap_or_else(|e| {
        if !matches!(e, rusqlite::Error::QueryReturnedNoRows) {
            tracing::warn!(error = %e, "failed to read schema_version");
        }
        0
    })
}

fn set_schema_version(conn: &Connection, version: i32) -> SqliteResult<()> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
    Ok(())
}

/// Migration v1: base tables.
///
/// Dates are stored as `YYYY-MM-DD` text so string comparison matches
/// calendar order.
fn migrate_v1(conn: &Connection) -> SqliteResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(
        "CREATE TABLE IF NOT EXISTS workout_records (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            exercise  TEXT NOT NULL,
            set_num   INTEGER NOT NULL,
            weight    REAL NOT NULL,
            reps      INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS exercises (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS notes (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            title    TEXT NOT NULL,
            content  TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS diet_records (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            date       TEXT NOT NULL,
            meal_type  TEXT NOT NULL,
            food_name  TEXT NOT NULL,
            calories   REAL NOT NULL DEFAULT 0,
            carbs      REAL NOT NULL DEFAULT 0,
            protein    REAL NOT NULL DEFAULT 0,
            fat        REAL NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS body_weight (
            date    TEXT PRIMARY KEY,
            weight  REAL NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_workout_records_date ON workout_records(date);
        CREATE INDEX IF NOT EXISTS idx_diet_records_date ON diet_records(date);",
    )?;
    set_schema_version(&tx, 1)?;
    tx.commit()?;
    tracing::info!(version = 1, "applied schema migration");
    Ok(())
}

/// Migration v2: index for per-exercise trend queries.
fn migrate_v2(conn: &Connection) -> SqliteResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_workout_records_exercise_date
            ON workout_records(exercise, date);",
    )?;
    set_schema_version(&tx, 2)?;
    tx.commit()?;
    tracing::info!(version = 2, "applied schema migration");
    Ok(())
}
