//! SerpAPI backend: the only code that talks to the search provider over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::search::{Provider, SearchError, SearchResult};

pub const DEFAULT_ENDPOINT: &str = "https://serpapi.com/search";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// One outbound search as seen by a backend. `num` is already capped.
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub provider: Provider,
    pub num: usize,
}

/// A raw organic result. Any field may be missing in the provider payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicResult {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
}

impl OrganicResult {
    pub fn into_result(self, provider: Provider) -> SearchResult {
        SearchResult {
            title: self.title.unwrap_or_default(),
            link: self.link.unwrap_or_default(),
            snippet: self.snippet.unwrap_or_default(),
            source: provider,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

/// Network seam of the search client. `SearchClient` owns caching and
/// normalization; a backend only performs the round-trip.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn fetch(&self, request: &SearchRequest<'_>) -> Result<Vec<OrganicResult>, SearchError>;
}

pub struct SerpApiBackend {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl SerpApiBackend {
    /// Fails with `MissingApiKey` when no usable key is supplied, so a
    /// misconfigured deployment dies at startup instead of on first search.
    pub fn new(api_key: Option<String>, endpoint: impl Into<String>) -> Result<Self, SearchError> {
        Self::with_timeout(api_key, endpoint, DEFAULT_TIMEOUT)
    }

    /// Like `new`, with an explicit bound on the whole round-trip.
    pub fn with_timeout(
        api_key: Option<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(SearchError::MissingApiKey)?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl SearchBackend for SerpApiBackend {
    async fn fetch(&self, request: &SearchRequest<'_>) -> Result<Vec<OrganicResult>, SearchError> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", request.query.to_string()),
            ("api_key", self.api_key.clone()),
            ("engine", request.provider.engine().to_string()),
            ("num", request.num.to_string()),
        ];
        if let Some(country) = request.provider.country() {
            params.push(("gl", country.to_string()));
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SerpApiResponse = serde_json::from_str(&body)?;
        debug!(
            "SerpAPI {} returned {} organic results",
            request.provider.engine(),
            parsed.organic_results.len()
        );
        Ok(parsed.organic_results)
    }
}
