use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/exercises",
            get(handlers::list_exercises).post(handlers::add_exercise),
        )
        .route("/api/exercises/muscle/:group", get(handlers::exercises_by_muscle_group))
        .route(
            "/api/progress",
            get(handlers::list_progress).post(handlers::add_progress),
        )
        .route("/api/progress/recent", get(handlers::recent_progress_entries))
        .route("/api/progress/exercise/:id", get(handlers::progress_for_exercise))
        .route("/api/progress/muscle/:group", get(handlers::progress_by_muscle_group))
        .route("/api/chart", get(handlers::chart))
        .with_state(state)
}
