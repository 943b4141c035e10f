use crate::error::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;

pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure of a request. The underlying cause is logged, never sent to the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
}

impl ApiError {
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        error!("Request failed: {}", cause);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::internal(err)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}
