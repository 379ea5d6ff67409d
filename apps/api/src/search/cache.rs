//! Process-lifetime cache of normalized search results, keyed by query hash.
//!
//! Entries expire after the configured TTL but are never evicted: a stale
//! entry stays in the map and is simply ignored until the next miss
//! overwrites it.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};

use crate::search::{Provider, SearchResult};

/// Default time-to-live for cached results.
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Source of "now" for TTL checks. Swapped for a manual clock in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub timestamp: DateTime<Utc>,
    pub results: Vec<SearchResult>,
}

pub struct SearchCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

/// Converts a TTL in seconds, or `None` when it is too large to represent.
pub fn ttl_from_secs(ttl_secs: u64) -> Option<Duration> {
    i64::try_from(ttl_secs).ok().and_then(Duration::try_seconds)
}

impl SearchCache {
    /// A TTL beyond what `ttl_from_secs` accepts saturates: entries never expire.
    pub fn new(ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl: ttl_from_secs(ttl_secs).unwrap_or_else(Duration::max_value),
            clock,
        }
    }

    /// Returns the stored results for `key` if the entry is younger than the TTL.
    pub fn get(&self, key: &str) -> Option<&[SearchResult]> {
        let entry = self.entries.get(key)?;
        if self.clock.now() - entry.timestamp < self.ttl {
            Some(entry.results.as_slice())
        } else {
            None
        }
    }

    /// Stores `results` under `key`, replacing whatever was there.
    pub fn insert(&mut self, key: String, results: Vec<SearchResult>) {
        let entry = CacheEntry {
            timestamp: self.clock.now(),
            results,
        };
        self.entries.insert(key, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Deterministic cache key for a query. Bing keys carry a prefix so the two
/// providers never share an entry for the same query string.
pub fn cache_key(query: &str, provider: Provider) -> String {
    let digest = Sha256::digest(query.as_bytes());
    format!("{}search_{}", provider.cache_prefix(), hex::encode(digest))
}
