//! Axum route handlers for raw web search and cache maintenance.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::search::{Provider, SearchResult};
use crate::state::AppState;

const DEFAULT_MAX_RESULTS: usize = 10;

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

#[derive(Debug, Deserialize)]
pub struct WebSearchRequest {
    pub query: String,
    #[serde(default)]
    pub provider: Provider,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Debug, Serialize)]
pub struct WebSearchResponse {
    pub results: Vec<SearchResult>,
}

/// POST /api/v1/search
pub async fn handle_web_search(
    State(state): State<AppState>,
    Json(request): Json<WebSearchRequest>,
) -> Result<Json<WebSearchResponse>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let results = state
        .search
        .search(&request.query, request.provider, request.max_results)
        .await?;

    Ok(Json(WebSearchResponse { results }))
}

/// DELETE /api/v1/search/cache
pub async fn handle_clear_cache(State(state): State<AppState>) -> StatusCode {
    state.search.clear_cache().await;
    StatusCode::NO_CONTENT
}
