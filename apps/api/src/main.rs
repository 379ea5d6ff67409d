mod config;
mod errors;
mod llm_client;
mod outreach;
mod routes;
mod search;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::search::cache::{SearchCache, SystemClock};
use crate::search::serpapi::SerpApiBackend;
use crate::search::SearchClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Outreach API v{}", env!("CARGO_PKG_VERSION"));

    // Search client (fails fast without SERPAPI_KEY)
    let backend = SerpApiBackend::new(config.serpapi_key.clone(), config.serpapi_url.clone())?;
    let cache = SearchCache::new(config.search_cache_ttl_secs, Arc::new(SystemClock));
    let search = Arc::new(SearchClient::new(Arc::new(backend), cache));
    info!(
        "Search client initialized (cache TTL {}s)",
        config.search_cache_ttl_secs
    );

    // Generation client
    let llm = LlmClient::new(config.ollama_url.clone(), config.ollama_model.clone())?;
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm.model(),
        config.ollama_url
    );

    let state = AppState {
        search,
        llm: Arc::new(llm),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
