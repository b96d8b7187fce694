//! MapQuest radius-search client for nearby points of interest
//!
//! Composes a radius search around a site's postal code, fetches it through
//! the shared cache, and decodes the result list into normalized `Place`
//! records. Optional payload fields are filled with fixed sentinel strings
//! when absent or empty.

use serde::Deserialize;
use thiserror::Error;

use crate::cache::CacheStore;
use crate::data::{Place, Site};
use crate::fetch::{CachedFetcher, FetchError};

/// Radius search endpoint
const SEARCH_BASE_URL: &str = "http://www.mapquestapi.com/search/v2/radius";

/// Fixed search radius around the origin postal code
const SEARCH_RADIUS: u32 = 10;

/// Fixed maximum number of results requested
const MAX_MATCHES: u32 = 10;

/// Sentinel used when a result has no usable category
const NO_CATEGORY: &str = "no category";

/// Sentinel used when a result has no usable street address
const NO_ADDRESS: &str = "no address";

/// Sentinel used when a result has no usable city
const NO_CITY: &str = "no city";

/// Errors that can occur when fetching nearby places
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Fetching the search URL failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The response was not valid JSON or lacked the expected result list
    #[error("Failed to parse places response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level radius search response
#[derive(Debug, Deserialize)]
struct RadiusSearchResponse {
    /// Result list; its absence is a fatal decode error
    #[serde(rename = "searchResults")]
    search_results: Vec<SearchResult>,
}

/// One raw search result, before sentinel normalization
#[derive(Debug, Deserialize)]
struct SearchResult {
    name: String,
    /// Street address; absent for some result types
    address: Option<String>,
    /// Secondary attributes; the whole object may be absent
    #[serde(default)]
    fields: ResultFields,
}

/// Secondary attributes of a search result
#[derive(Debug, Default, Deserialize)]
struct ResultFields {
    /// Category group name
    group_sic_code_name: Option<String>,
    /// City of the result
    city: Option<String>,
}

/// Client for the MapQuest radius search API
#[derive(Debug, Clone)]
pub struct NearbyPlacesClient {
    /// API credential, supplied out-of-band
    api_key: String,
    /// Base URL for the endpoint (allows override for testing)
    base_url: String,
}

impl NearbyPlacesClient {
    /// Creates a client using the given API credential
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: SEARCH_BASE_URL.to_string(),
        }
    }

    /// Creates a client with a custom base URL (for testing)
    #[cfg(test)]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Composes the search URL for a site's postal code
    ///
    /// Fixed parameters: radius=10, maxMatches=10, ambiguities=ignore,
    /// outFormat=json. The composed URL doubles as the cache key.
    pub fn search_url(&self, site: &Site) -> String {
        format!(
            "{}?origin={}&radius={}&maxMatches={}&ambiguities=ignore&outFormat=json&key={}",
            self.base_url, site.zipcode, SEARCH_RADIUS, MAX_MATCHES, self.api_key
        )
    }

    /// Fetches places near a site, going through the cache
    ///
    /// # Arguments
    /// * `site` - The site whose postal code is the search origin
    /// * `fetcher` - The cache-backed fetcher to issue the request with
    /// * `cache` - The store consulted before any network call
    ///
    /// # Returns
    /// * `Ok(Vec<Place>)` - Normalized places, in API result order
    /// * `Err(PlacesError)` - If the fetch fails or the response is malformed
    pub async fn fetch_nearby(
        &self,
        site: &Site,
        fetcher: &CachedFetcher,
        cache: &mut CacheStore,
    ) -> Result<Vec<Place>, PlacesError> {
        let url = self.search_url(site);
        let body = fetcher.fetch_text(&url, cache).await?;
        extract_places(&body)
    }
}

/// Decodes a radius search response body into normalized places
///
/// Fails if the body is not valid JSON or lacks the top-level result list.
/// Category, address, and city are resolved independently: an absent field
/// or a present-but-empty string both collapse to the field's sentinel.
pub fn extract_places(body: &str) -> Result<Vec<Place>, PlacesError> {
    let response: RadiusSearchResponse = serde_json::from_str(body)?;
    Ok(response.search_results.into_iter().map(normalize).collect())
}

/// Applies sentinel substitution to one raw search result
fn normalize(result: SearchResult) -> Place {
    Place {
        name: result.name,
        category: or_sentinel(result.fields.group_sic_code_name, NO_CATEGORY),
        address: or_sentinel(result.address, NO_ADDRESS),
        city: or_sentinel(result.fields.city, NO_CITY),
    }
}

/// Returns the value unless it is absent or empty, else the sentinel
fn or_sentinel(value: Option<String>, sentinel: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => sentinel.to_string(),
    }
}
