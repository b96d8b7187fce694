//! State listing extractor
//!
//! Extracts the ordered list of detail-page URLs from a per-state listing
//! page. Document order is preserved because it determines the numbering the
//! user selects by.

use scraper::Html;

use super::{selector, ScrapeError};

/// Prefix of every composed detail-page URL
const DETAIL_URL_PREFIX: &str = "https://www.nps.gov/";

/// Suffix appended to the relative path of every listing entry
const DETAIL_URL_SUFFIX: &str = "index.htm";

/// Extracts detail-page URLs from a state listing page, in document order
///
/// Each entry of the `ul#list_parks` container contributes one URL, composed
/// as `https://www.nps.gov/` + relative path + `index.htm`.
///
/// # Returns
/// * `Ok(Vec<String>)` - Detail URLs, ordered as they appear on the page
/// * `Err(ScrapeError)` - If the list container or an entry link is missing
pub fn extract_site_urls(html: &str) -> Result<Vec<String>, ScrapeError> {
    let document = Html::parse_document(html);
    let entries = selector("ul#list_parks > li")?;
    let link = selector("a")?;

    let mut urls = Vec::new();
    let mut found_any = false;
    for entry in document.select(&entries) {
        found_any = true;
        let anchor = entry
            .select(&link)
            .next()
            .ok_or(ScrapeError::MissingElement("site link in listing entry"))?;
        let path = anchor
            .value()
            .attr("href")
            .ok_or(ScrapeError::MissingHref("state listing"))?;
        urls.push(format!("{}{}{}", DETAIL_URL_PREFIX, path, DETAIL_URL_SUFFIX));
    }

    if !found_any {
        return Err(ScrapeError::MissingElement("site listing container"));
    }
    Ok(urls)
}
