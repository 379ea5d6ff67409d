use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::search::SearchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Search(e) if e.is_timeout() => {
                tracing::warn!("Search timed out: {e}");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "SEARCH_TIMEOUT",
                    "Search took too long. Try a more specific location or fewer industries."
                        .to_string(),
                )
            }
            AppError::Search(SearchError::MissingApiKey) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                "Search is not configured".to_string(),
            ),
            AppError::Search(e) => {
                tracing::error!("Search error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SEARCH_ERROR",
                    format!("Search error: {e}"),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
