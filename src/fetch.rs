//! Cache-backed HTTP fetcher
//!
//! Wraps HTTP GET requests behind the persistent `CacheStore`: a hit returns
//! the stored body with no network I/O, a miss issues one request and writes
//! the body back before returning it.

use reqwest::header::{HeaderMap, HeaderValue, FROM, USER_AGENT};
use reqwest::Client;
use thiserror::Error;

use crate::cache::CacheStore;

/// Identifying user agent sent with every request
const FETCH_USER_AGENT: &str = "parkscout/0.1 (park directory research tool)";

/// Contact address sent in the `From` header
const FETCH_FROM: &str = "parkscout@users.noreply.github.com";

/// Errors that can occur when fetching a URL
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed at the network level (DNS, connect, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Writing the response back to the cache file failed
    #[error("Failed to persist cache: {0}")]
    CacheWrite(#[from] std::io::Error),
}

/// HTTP client that consults the cache before touching the network
///
/// The lookup key is the exact URL string, including any query parameters
/// already embedded by the caller; no normalization is applied. Response
/// bodies are cached regardless of HTTP status code, so an upstream error
/// page can be cached as if it were valid content. That mirrors the cache's
/// documented last-write-wins, never-expires contract: there is no freshness
/// check and no retry.
#[derive(Debug, Clone)]
pub struct CachedFetcher {
    /// HTTP client carrying the fixed identifying header set
    http: Client,
}

impl CachedFetcher {
    /// Creates a fetcher with the fixed identifying header set
    ///
    /// # Returns
    /// * `Ok(CachedFetcher)` on success
    /// * `Err` if the underlying HTTP client cannot be constructed
    pub fn new() -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(FETCH_USER_AGENT));
        headers.insert(FROM, HeaderValue::from_static(FETCH_FROM));

        let http = Client::builder().default_headers(headers).build()?;
        Ok(Self { http })
    }

    /// Fetches the body for `url`, going through the cache
    ///
    /// # Arguments
    /// * `url` - The URL to fetch; used verbatim as the cache key
    /// * `cache` - The store consulted before any network call
    ///
    /// # Returns
    /// * `Ok(String)` - The cached or freshly fetched body
    /// * `Err(FetchError)` - If the network request or the cache write fails
    pub async fn fetch_text(
        &self,
        url: &str,
        cache: &mut CacheStore,
    ) -> Result<String, FetchError> {
        if let Some(body) = cache.get(url) {
            return Ok(body.to_string());
        }

        // Any returned body is cached, with no status-code validation.
        let body = self.http.get(url).send().await?.text().await?;
        cache.put(url, &body)?;
        Ok(body)
    }
}
