use super::error::ApiError;
use super::AppState;
use crate::statistics::{DashboardProgress, QuickStats};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quick-stats", get(quick_stats))
        .route("/study_progress", get(study_progress))
}

async fn quick_stats(State(state): State<AppState>) -> Result<Json<QuickStats>, ApiError> {
    Ok(Json(state.run(|s| s.quick_stats()).await?))
}

async fn study_progress(
    State(state): State<AppState>,
) -> Result<Json<DashboardProgress>, ApiError> {
    Ok(Json(state.run(|s| s.dashboard_progress()).await?))
}
