use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::search::SearchClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the only process-wide mutable state: the search result cache.
    pub search: Arc<SearchClient>,
    /// `LlmClient` in production.
    pub llm: Arc<dyn TextGenerator>,
}
