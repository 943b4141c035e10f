use super::error::ApiError;
use super::AppState;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/history", post(reset_history))
        .route("/full", post(full_reset))
}

async fn reset_history(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    state.run(|s| s.reset_history()).await?;
    Ok(Json(MessageResponse {
        message: "Study history has been reset",
    }))
}

async fn full_reset(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    state.run(|s| s.full_reset()).await?;
    Ok(Json(MessageResponse {
        message: "System has been fully reset",
    }))
}
