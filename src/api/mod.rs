mod dashboard;
pub mod error;
mod reset;
mod statistics;

use crate::statistics_service::StatisticsService;
use axum::routing::get;
use axum::{Json, Router};
use error::ApiError;
use serde::Serialize;

pub use error::ErrorResponse;

#[derive(Clone)]
pub struct AppState {
    pub statistics: StatisticsService,
}

impl AppState {
    pub fn new(statistics: StatisticsService) -> Self {
        Self { statistics }
    }

    /// Runs a blocking store call off the async runtime
    pub(crate) async fn run<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&StatisticsService) -> crate::error::StoreResult<T> + Send + 'static,
    {
        let service = self.statistics.clone();
        let result = tokio::task::spawn_blocking(move || call(&service)).await?;
        Ok(result?)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/statistics", statistics::router())
        .nest("/dashboard", dashboard::router())
        .nest("/reset", reset::router())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
