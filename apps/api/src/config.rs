use anyhow::{Context, Result};

use crate::llm_client;
use crate::search::{cache, serpapi};

/// Application configuration loaded from environment variables.
/// `SERPAPI_KEY` is read here but validated when the search backend is built.
#[derive(Debug, Clone)]
pub struct Config {
    pub serpapi_key: Option<String>,
    pub serpapi_url: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub search_cache_ttl_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            serpapi_key: std::env::var("SERPAPI_KEY").ok(),
            serpapi_url: env_or("SERPAPI_URL", serpapi::DEFAULT_ENDPOINT),
            ollama_url: env_or("OLLAMA_URL", llm_client::DEFAULT_ENDPOINT),
            ollama_model: env_or("OLLAMA_MODEL", llm_client::DEFAULT_MODEL),
            search_cache_ttl_secs: parse_cache_ttl(&env_or(
                "SEARCH_CACHE_TTL_SECS",
                &cache::DEFAULT_TTL_SECS.to_string(),
            ))?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_cache_ttl(raw: &str) -> Result<u64> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .context("SEARCH_CACHE_TTL_SECS must be a whole number of seconds")?;
    cache::ttl_from_secs(secs)
        .with_context(|| format!("SEARCH_CACHE_TTL_SECS={secs} is too large"))?;
    Ok(secs)
}
