//! LRU cache for HTTP GET responses with TTL support.
//!
//! Writes (finalize, slot commits, bracket generation) invalidate every
//! cached read for the affected tournament so the next render sees the
//! authoritative state.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Cached HTTP response body with TTL.
#[derive(Debug, Clone)]
pub struct CachedHttpResponse {
    pub data: String,
    pub cached_at: Instant,
    pub ttl_seconds: u64,
}

impl CachedHttpResponse {
    pub fn new(data: String, ttl_seconds: u64) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
            ttl_seconds,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.cached_at.elapsed() > Duration::from_secs(self.ttl_seconds)
    }
}

static HTTP_RESPONSE_CACHE: LazyLock<RwLock<LruCache<String, CachedHttpResponse>>> =
    LazyLock::new(|| RwLock::new(LruCache::new(NonZeroUsize::new(100).unwrap())));

/// Caches a response body under its URL.
pub async fn cache_http_response(url: String, data: String, ttl_seconds: u64) {
    debug!(
        "Caching HTTP response: url={}, data_size={}, ttl={}s",
        url,
        data.len(),
        ttl_seconds
    );
    let mut cache = HTTP_RESPONSE_CACHE.write().await;
    cache.put(url, CachedHttpResponse::new(data, ttl_seconds));
}

/// Retrieves a cached response body if present and not expired.
pub async fn get_cached_http_response(url: &str) -> Option<String> {
    let mut cache = HTTP_RESPONSE_CACHE.write().await;

    if let Some(entry) = cache.get(url) {
        if !entry.is_expired() {
            debug!(
                "Cache hit: url={}, age={:?}",
                url,
                entry.cached_at.elapsed()
            );
            return Some(entry.data.clone());
        }
        warn!(
            "Removing expired cache entry: url={}, age={:?}",
            url,
            entry.cached_at.elapsed()
        );
        cache.pop(url);
    }
    None
}

/// Whether a cached URL refers to the given resource path segment. The id
/// must be followed by a path separator or the end of the URL, so id 1 does
/// not also match ids 10-19.
fn url_mentions(url: &str, segment: &str) -> bool {
    url.ends_with(segment)
        || url
            .find(segment)
            .is_some_and(|pos| url.as_bytes().get(pos + segment.len()) == Some(&b'/'))
}

async fn invalidate_by_segment(segment: &str) {
    let mut cache = HTTP_RESPONSE_CACHE.write().await;
    let stale: Vec<String> = cache
        .iter()
        .filter(|(url, _)| url_mentions(url, segment))
        .map(|(url, _)| url.clone())
        .collect();
    for url in stale {
        cache.pop(&url);
    }
}

/// Drops every cached entry whose URL mentions the given tournament. Called
/// after any write so stale brackets or goal-event lists are not served.
pub async fn invalidate_tournament(tournament_id: i64) {
    invalidate_by_segment(&format!("/tournaments/{tournament_id}")).await;
}

/// Drops cached goal-event reads for one match.
pub async fn invalidate_match(match_id: i64) {
    invalidate_by_segment(&format!("/matches/{match_id}")).await;
}

/// Extends the TTL of an already-cached entry, keeping its data and age.
/// Used once a resource is known to be immutable (completed bracket, played
/// match) so it stops being refetched every short-TTL window. No-op when
/// the URL is not cached.
pub async fn promote_http_response_ttl(url: &str, ttl_seconds: u64) {
    let mut cache = HTTP_RESPONSE_CACHE.write().await;
    if let Some(entry) = cache.get_mut(url)
        && entry.ttl_seconds < ttl_seconds
    {
        debug!("Promoting cache TTL: url={}, ttl={}s", url, ttl_seconds);
        entry.ttl_seconds = ttl_seconds;
    }
}

/// Current number of cached responses, for diagnostics.
pub async fn http_cache_size() -> usize {
    HTTP_RESPONSE_CACHE.read().await.len()
}

#[allow(dead_code)]
pub async fn clear_http_response_cache() {
    HTTP_RESPONSE_CACHE.write().await.clear();
}
