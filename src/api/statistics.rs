use super::error::ApiError;
use super::AppState;
use crate::statistics::{ActivityStatsByType, StudyMetrics, StudyProgress, UserStats};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", get(user_stats))
        .route("/activities", get(activity_stats))
        .route("/progress", get(study_progress))
        .route("/metrics", get(metrics))
}

async fn user_stats(State(state): State<AppState>) -> Result<Json<UserStats>, ApiError> {
    Ok(Json(state.run(|s| s.user_stats()).await?))
}

async fn activity_stats(
    State(state): State<AppState>,
) -> Result<Json<ActivityStatsByType>, ApiError> {
    Ok(Json(state.run(|s| s.activity_stats()).await?))
}

async fn study_progress(State(state): State<AppState>) -> Result<Json<StudyProgress>, ApiError> {
    Ok(Json(state.run(|s| s.study_progress()).await?))
}

async fn metrics(State(state): State<AppState>) -> Result<Json<StudyMetrics>, ApiError> {
    Ok(Json(state.run(|s| s.metrics()).await?))
}
