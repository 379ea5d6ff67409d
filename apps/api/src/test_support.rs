//! Shared fakes for unit tests: search backend, generator, clock, mock HTTP server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::llm_client::{GenerationError, TextGenerator};
use crate::search::cache::Clock;
use crate::search::serpapi::{OrganicResult, SearchBackend, SearchRequest};
use crate::search::{Provider, SearchError, SearchResult};

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn organic(title: &str, snippet: &str) -> OrganicResult {
    OrganicResult {
        title: Some(title.to_string()),
        link: Some(format!(
            "https://www.linkedin.com/in/{}",
            title.split_whitespace().next().unwrap_or("someone").to_lowercase()
        )),
        snippet: Some(snippet.to_string()),
    }
}

pub fn sample_result(title: &str) -> SearchResult {
    SearchResult {
        title: title.to_string(),
        link: "https://www.linkedin.com/in/sample".to_string(),
        snippet: String::new(),
        source: Provider::Google,
    }
}

/// Counts calls and records every request it sees.
pub struct FakeBackend {
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, Provider, usize)>>,
    results: Mutex<Vec<OrganicResult>>,
    fail_status: Mutex<Option<u16>>,
    delay: Option<std::time::Duration>,
}

impl FakeBackend {
    pub fn with_results(results: Vec<OrganicResult>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            results: Mutex::new(results),
            fail_status: Mutex::new(None),
            delay: None,
        }
    }

    /// Every fetch sleeps for `delay` before answering.
    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing(status: u16) -> Self {
        let backend = Self::with_results(Vec::new());
        *backend.fail_status.lock().unwrap() = Some(status);
        backend
    }

    /// Replaces the canned results and stops failing.
    pub fn set_results(&self, results: Vec<OrganicResult>) {
        *self.results.lock().unwrap() = results;
        *self.fail_status.lock().unwrap() = None;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(String, Provider, usize)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchBackend for FakeBackend {
    async fn fetch(&self, request: &SearchRequest<'_>) -> Result<Vec<OrganicResult>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push((
            request.query.to_string(),
            request.provider,
            request.num,
        ));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(status) = *self.fail_status.lock().unwrap() {
            return Err(SearchError::Status {
                status,
                body: "provider unavailable".to_string(),
            });
        }
        Ok(self.results.lock().unwrap().clone())
    }
}

/// Replies with a fixed string, or fails every call. Records prompts.
pub struct ScriptedGenerator {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(GenerationError::Service {
                status: 500,
                body: "model crashed".to_string(),
            }),
        }
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
