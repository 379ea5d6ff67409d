pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::outreach::handlers;
use crate::search::handlers as search_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Outreach API
        .route(
            "/api/v1/outreach/search",
            post(handlers::handle_search_profiles),
        )
        .route(
            "/api/v1/outreach/variants",
            post(handlers::handle_generate_variants),
        )
        .route(
            "/api/v1/outreach/message",
            post(handlers::handle_generate_message),
        )
        .route("/api/v1/outreach/extract", post(handlers::handle_extract))
        .route("/api/v1/outreach/presets", get(handlers::handle_presets))
        .route("/api/v1/outreach/demo", get(handlers::handle_demo))
        // Search API
        .route("/api/v1/search", post(search_handlers::handle_web_search))
        .route(
            "/api/v1/search/cache",
            delete(search_handlers::handle_clear_cache),
        )
        .with_state(state)
}
