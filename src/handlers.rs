use crate::errors::AppError;
use crate::models::{
    ChartQuery, ChartResponse, Exercise, ExerciseCreated, NewExercise, NewProgress,
    ProgressCreated, ProgressEntry,
};
use crate::queries;
use crate::state::AppState;
use crate::stats::{filter_by_time_range, group_by_exercise, recent_progress, TimeRange};
use crate::ui::render_index;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::Html,
    Json,
};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (exercises, progress) = state
        .store
        .call(|conn| Ok((queries::list_exercises(conn)?, queries::list_progress(conn)?)))
        .await?;
    Ok(Html(render_index(
        &today_string(),
        &exercises,
        recent_progress(&progress),
    )))
}

pub async fn list_exercises(State(state): State<AppState>) -> Result<Json<Vec<Exercise>>, AppError> {
    let exercises = state.store.call(|conn| queries::list_exercises(conn)).await?;
    Ok(Json(exercises))
}

pub async fn exercises_by_muscle_group(
    State(state): State<AppState>,
    Path(group): Path<String>,
) -> Result<Json<Vec<Exercise>>, AppError> {
    let exercises = state
        .store
        .call(move |conn| queries::list_exercises_by_muscle_group(conn, &group))
        .await?;
    Ok(Json(exercises))
}

pub async fn add_exercise(
    State(state): State<AppState>,
    payload: Result<Json<NewExercise>, JsonRejection>,
) -> Result<Json<ExerciseCreated>, AppError> {
    let Json(input) = payload?;
    let exercise = state
        .store
        .call(move |conn| queries::add_exercise(conn, input))
        .await?;

    Ok(Json(ExerciseCreated {
        id: exercise.id,
        name: exercise.name,
        muscle_group: exercise.muscle_group,
        message: "Exercise added successfully".to_string(),
    }))
}

pub async fn list_progress(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProgressEntry>>, AppError> {
    let progress = state.store.call(|conn| queries::list_progress(conn)).await?;
    Ok(Json(progress))
}

pub async fn recent_progress_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProgressEntry>>, AppError> {
    let progress = state.store.call(|conn| queries::list_progress(conn)).await?;
    Ok(Json(recent_progress(&progress).to_vec()))
}

pub async fn progress_for_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ProgressEntry>>, AppError> {
    let Ok(exercise_id) = id.trim().parse::<i64>() else {
        return Ok(Json(Vec::new()));
    };
    let progress = state
        .store
        .call(move |conn| queries::list_progress_for_exercise(conn, exercise_id))
        .await?;
    Ok(Json(progress))
}

pub async fn progress_by_muscle_group(
    State(state): State<AppState>,
    Path(group): Path<String>,
) -> Result<Json<Vec<ProgressEntry>>, AppError> {
    let progress = state
        .store
        .call(move |conn| queries::list_progress_by_muscle_group(conn, &group))
        .await?;
    Ok(Json(progress))
}

pub async fn add_progress(
    State(state): State<AppState>,
    payload: Result<Json<NewProgress>, JsonRejection>,
) -> Result<Json<ProgressCreated>, AppError> {
    let Json(input) = payload?;
    let entry = state
        .store
        .call(move |conn| queries::add_progress(conn, input))
        .await?;

    Ok(Json(ProgressCreated {
        id: entry.id,
        exercise_id: entry.exercise_id,
        weight: entry.weight,
        date: entry.date,
        message: "Progress added successfully".to_string(),
    }))
}

/// Chart data for the View Progress tab: an exercise selection wins over a
/// muscle group, and `all` or an empty value means no filter.
pub async fn chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartResponse>, AppError> {
    let range = TimeRange::parse(query.range.as_deref().unwrap_or_default());
    let exercise = selected(query.exercise_id);
    let muscle_group = selected(query.muscle_group);

    let entries = state
        .store
        .call(move |conn| match (exercise, muscle_group) {
            (Some(id), _) => match id.trim().parse::<i64>() {
                Ok(exercise_id) => queries::list_progress_for_exercise(conn, exercise_id),
                Err(_) => Ok(Vec::new()),
            },
            (None, Some(group)) => queries::list_progress_by_muscle_group(conn, &group),
            (None, None) => queries::list_progress(conn),
        })
        .await?;

    let filtered = filter_by_time_range(entries, range);
    Ok(Json(ChartResponse {
        range: range.as_str().to_string(),
        total: filtered.len(),
        groups: group_by_exercise(&filtered),
    }))
}

fn selected(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty() && value != "all")
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
