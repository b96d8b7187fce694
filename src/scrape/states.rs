//! State directory builder
//!
//! Builds the lookup from state/territory name to its listing page URL by
//! parsing the navigation dropdown on the parks directory base page.

use std::collections::HashMap;

use scraper::Html;

use super::{selector, ScrapeError};
use crate::cache::CacheStore;
use crate::fetch::{CachedFetcher, FetchError};

/// Entry page of the parks directory
pub const BASE_URL: &str = "https://www.nps.gov/index.htm";

/// Origin prepended to the relative state links found in the dropdown
const SITE_ORIGIN: &str = "https://www.nps.gov";

/// Errors that can occur while building the state index
#[derive(Debug, thiserror::Error)]
pub enum StateIndexError {
    /// Fetching the base page failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The navigation markup was absent or malformed
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
}

/// Parses the state dropdown into a name-to-URL mapping
///
/// Keys are the trimmed, lowercased link texts, so lookups are
/// case-insensitive by construction. Values are absolute listing page URLs.
///
/// # Returns
/// * `Ok(HashMap)` mapping e.g. `"michigan"` to
///   `"https://www.nps.gov/state/mi/index.htm"`
/// * `Err(ScrapeError)` if the dropdown container or a state link is missing
pub fn parse_state_index(html: &str) -> Result<HashMap<String, String>, ScrapeError> {
    let document = Html::parse_document(html);
    let dropdown = selector("ul.dropdown-menu.SearchBar-keywordSearch > li")?;
    let link = selector("a")?;

    let mut index = HashMap::new();
    let mut found_any = false;
    for item in document.select(&dropdown) {
        found_any = true;
        let anchor = item
            .select(&link)
            .next()
            .ok_or(ScrapeError::MissingElement("state link in dropdown entry"))?;
        let name = anchor.text().collect::<String>().trim().to_lowercase();
        let href = anchor
            .value()
            .attr("href")
            .ok_or(ScrapeError::MissingHref("state dropdown"))?;
        index.insert(name, format!("{}{}", SITE_ORIGIN, href));
    }

    if !found_any {
        return Err(ScrapeError::MissingElement("state navigation dropdown"));
    }
    Ok(index)
}

/// Fetches the base page through the cache and builds the state index
pub async fn build_state_index(
    fetcher: &CachedFetcher,
    cache: &mut CacheStore,
) -> Result<HashMap<String, String>, StateIndexError> {
    let body = fetcher.fetch_text(BASE_URL, cache).await?;
    Ok(parse_state_index(&body)?)
}
