//! Reads and commands over the `exercises` and `progress` tables.
//!
//! Every function takes the connection explicitly; callers obtain it through
//! [`crate::storage::Store`].

use crate::errors::AppError;
use crate::models::{Exercise, ExerciseRef, NewExercise, NewProgress, ProgressEntry, WeightInput};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use tracing::info;

pub const EXERCISE_FIELDS_REQUIRED: &str = "Exercise name and muscle group are required";
pub const PROGRESS_FIELDS_REQUIRED: &str = "Exercise ID, weight, and date are required";
pub const EXERCISE_EXISTS: &str = "Exercise already exists";
pub const EXERCISE_MISSING: &str = "Exercise does not exist";

const PROGRESS_SELECT: &str = "
    SELECT p.id, p.exercise_id, e.name AS exercise_name, e.muscle_group, p.weight, p.date
    FROM progress p
    JOIN exercises e ON p.exercise_id = e.id";

fn exercise_from_row(row: &Row<'_>) -> rusqlite::Result<Exercise> {
    Ok(Exercise {
        id: row.get(0)?,
        name: row.get(1)?,
        muscle_group: row.get(2)?,
    })
}

fn progress_from_row(row: &Row<'_>) -> rusqlite::Result<ProgressEntry> {
    Ok(ProgressEntry {
        id: row.get(0)?,
        exercise_id: row.get(1)?,
        exercise_name: row.get(2)?,
        muscle_group: row.get(3)?,
        weight: row.get(4)?,
        date: row.get(5)?,
    })
}

pub fn list_exercises(conn: &Connection) -> Result<Vec<Exercise>, AppError> {
    let mut stmt =
        conn.prepare("SELECT id, name, muscle_group FROM exercises ORDER BY muscle_group, name")?;
    let rows = stmt
        .query_map([], exercise_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn list_exercises_by_muscle_group(
    conn: &Connection,
    group: &str,
) -> Result<Vec<Exercise>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, muscle_group FROM exercises WHERE muscle_group = ?1 ORDER BY name",
    )?;
    let rows = stmt
        .query_map([group], exercise_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Inserts a new exercise unless the exact `(name, muscle_group)` pair exists.
/// No trimming or case folding is applied to either field.
pub fn add_exercise(conn: &mut Connection, input: NewExercise) -> Result<Exercise, AppError> {
    let (name, muscle_group) = match (input.name, input.muscle_group) {
        (Some(name), Some(group)) if !name.is_empty() && !group.is_empty() => (name, group),
        _ => return Err(AppError::validation(EXERCISE_FIELDS_REQUIRED)),
    };

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let existing: Option<i64> = tx
        .query_row(
            "SELECT id FROM exercises WHERE name = ?1 AND muscle_group = ?2",
            params![name, muscle_group],
            |row| row.get(0),
        )
        .optional()?;
    if existing.is_some() {
        return Err(AppError::Conflict(EXERCISE_EXISTS.to_string()));
    }

    tx.execute(
        "INSERT INTO exercises (name, muscle_group) VALUES (?1, ?2)",
        params![name, muscle_group],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    info!(id, %name, %muscle_group, "exercise added");
    Ok(Exercise {
        id,
        name,
        muscle_group,
    })
}

/// Most recent first.
pub fn list_progress(conn: &Connection) -> Result<Vec<ProgressEntry>, AppError> {
    let mut stmt = conn.prepare(&format!("{PROGRESS_SELECT} ORDER BY p.date DESC"))?;
    let rows = stmt
        .query_map([], progress_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Oldest first, for charting a single exercise chronologically.
pub fn list_progress_for_exercise(
    conn: &Connection,
    exercise_id: i64,
) -> Result<Vec<ProgressEntry>, AppError> {
    let mut stmt = conn.prepare(&format!(
        "{PROGRESS_SELECT} WHERE p.exercise_id = ?1 ORDER BY p.date"
    ))?;
    let rows = stmt
        .query_map([exercise_id], progress_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn list_progress_by_muscle_group(
    conn: &Connection,
    group: &str,
) -> Result<Vec<ProgressEntry>, AppError> {
    let mut stmt = conn.prepare(&format!(
        "{PROGRESS_SELECT} WHERE e.muscle_group = ?1 ORDER BY e.name, p.date"
    ))?;
    let rows = stmt
        .query_map([group], progress_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn add_progress(conn: &mut Connection, input: NewProgress) -> Result<ProgressEntry, AppError> {
    let weight = input.weight.as_ref().and_then(WeightInput::value);
    let (exercise_ref, weight, date) = match (input.exercise_id, weight, input.date) {
        (Some(exercise_ref), Some(weight), Some(date))
            if !exercise_ref.is_blank() && !date.is_empty() =>
        {
            (exercise_ref, weight, date)
        }
        _ => return Err(AppError::validation(PROGRESS_FIELDS_REQUIRED)),
    };
    let exercise_id = resolve_exercise_id(&exercise_ref)?;

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let exercise = tx
        .query_row(
            "SELECT id, name, muscle_group FROM exercises WHERE id = ?1",
            [exercise_id],
            exercise_from_row,
        )
        .optional()?
        .ok_or_else(|| AppError::Reference(EXERCISE_MISSING.to_string()))?;

    tx.execute(
        "INSERT INTO progress (exercise_id, weight, date) VALUES (?1, ?2, ?3)",
        params![exercise.id, weight, date],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    info!(id, exercise_id = exercise.id, weight, %date, "progress added");
    Ok(ProgressEntry {
        id,
        exercise_id: exercise.id,
        exercise_name: exercise.name,
        muscle_group: exercise.muscle_group,
        weight,
        date,
    })
}

fn resolve_exercise_id(exercise_ref: &ExerciseRef) -> Result<i64, AppError> {
    exercise_ref
        .as_id()
        .ok_or_else(|| AppError::Reference(EXERCISE_MISSING.to_string()))
}
