//! Search Client: profile and web search through a provider backend, with a
//! per-query result cache in front of every network call.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub mod cache;
pub mod handlers;
pub mod serpapi;

use cache::{cache_key, SearchCache};
use serpapi::{SearchBackend, SearchRequest};

/// Scope token that restricts a web search to public LinkedIn profiles.
pub const PROFILE_SITE_SCOPE: &str = "site:linkedin.com/in";
pub const PROFILE_RESULT_COUNT: usize = 10;
/// Hard upper bound the provider accepts for `num`.
pub const MAX_PROVIDER_RESULTS: usize = 100;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("SERPAPI_KEY is not set")]
    MissingApiKey,

    #[error("Search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Search provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Search provider returned malformed JSON: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl SearchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, SearchError::Transport(e) if e.is_timeout())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Google,
    Bing,
}

impl Provider {
    pub fn engine(self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Bing => "bing",
        }
    }

    pub fn cache_prefix(self) -> &'static str {
        match self {
            Provider::Google => "",
            Provider::Bing => "bing_",
        }
    }

    /// Country restriction sent with the query, if any.
    pub fn country(self) -> Option<&'static str> {
        match self {
            Provider::Google => Some("us"),
            Provider::Bing => None,
        }
    }
}

/// A normalized organic result, tagged with the provider that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub source: Provider,
}

/// Builds the profile search query. Inputs are joined verbatim; any encoding
/// happens in the transport layer.
pub fn profile_query(role: &str, industry: &str, location: &str) -> String {
    format!("{PROFILE_SITE_SCOPE} {role} {industry} {location}")
}

pub struct SearchClient {
    backend: Arc<dyn SearchBackend>,
    cache: Mutex<SearchCache>,
    // One gate per cache key with a fetch in progress. Identical concurrent
    // queries wait on the same gate; different keys never block each other.
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SearchClient {
    pub fn new(backend: Arc<dyn SearchBackend>, cache: SearchCache) -> Self {
        Self {
            backend,
            cache: Mutex::new(cache),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Runs `query` against `provider`, serving from cache while the entry is fresh.
    pub async fn search(
        &self,
        query: &str,
        provider: Provider,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let key = cache_key(query, provider);
        if let Some(results) = self.cached(&key).await {
            debug!("Search cache hit ({}): {}", provider.engine(), query);
            return Ok(results);
        }

        let gate = self
            .in_flight
            .lock()
            .await
            .entry(key.clone())
            .or_default()
            .clone();
        let _fetching = gate.lock().await;

        // Another caller may have filled the entry while we waited.
        if let Some(results) = self.cached(&key).await {
            debug!("Search cache hit after wait ({}): {}", provider.engine(), query);
            return Ok(results);
        }

        let outcome = self.fetch(query, provider, max_results).await;
        if let Ok(results) = &outcome {
            self.cache.lock().await.insert(key.clone(), results.clone());
        }
        self.in_flight.lock().await.remove(&key);
        outcome
    }

    async fn cached(&self, key: &str) -> Option<Vec<SearchResult>> {
        self.cache.lock().await.get(key).map(<[SearchResult]>::to_vec)
    }

    async fn fetch(
        &self,
        query: &str,
        provider: Provider,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let request = SearchRequest {
            query,
            provider,
            num: max_results.min(MAX_PROVIDER_RESULTS),
        };
        let items = self.backend.fetch(&request).await?;

        let results: Vec<SearchResult> = items
            .into_iter()
            .take(max_results)
            .map(|item| item.into_result(provider))
            .collect();

        info!(
            "Search ({}) found {} results for: {}",
            provider.engine(),
            results.len(),
            query
        );
        Ok(results)
    }

    /// Searches public LinkedIn profiles matching role, industry and location.
    pub async fn search_profiles(
        &self,
        role: &str,
        industry: &str,
        location: &str,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let query = profile_query(role, industry, location);
        info!("Querying LinkedIn profiles: {query}");
        self.search(&query, Provider::Google, PROFILE_RESULT_COUNT)
            .await
    }

    pub async fn clear_cache(&self) {
        let mut cache = self.cache.lock().await;
        let dropped = cache.len();
        cache.clear();
        info!("Search cache cleared ({dropped} entries)");
    }
}
