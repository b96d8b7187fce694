//! Site detail extractor
//!
//! Parses one detail page into a `Site` record using the page's fixed
//! structural markers.

use scraper::{ElementRef, Html};

use super::{selector, ScrapeError};
use crate::data::Site;

/// Extracts a `Site` from a detail page
///
/// The five semantic fields are located by fixed markers: the hero
/// designation span (which may legitimately hold empty text), the hero title
/// link, and the `itemprop`-tagged address spans. Any missing marker is a
/// fatal parse error; there is no partial-record fallback.
pub fn extract_site(html: &str) -> Result<Site, ScrapeError> {
    let document = Html::parse_document(html);

    let category = text_of(&document, "span.Hero-designation", "hero designation")?;
    let name = text_of(&document, "a.Hero-title", "hero title")?;
    let locality = text_of(
        &document,
        r#"span[itemprop="addressLocality"]"#,
        "address locality",
    )?;
    let region = text_of(
        &document,
        r#"span[itemprop="addressRegion"]"#,
        "address region",
    )?;
    let zipcode = text_of(&document, r#"span[itemprop="postalCode"]"#, "postal code")?;
    let phone = text_of(&document, r#"span[itemprop="telephone"]"#, "telephone")?;

    Ok(Site {
        category,
        name,
        address: format!("{}, {}", locality, region),
        zipcode,
        phone,
    })
}

/// Returns the trimmed text of the first element matching `css`
fn text_of(document: &Html, css: &str, marker: &'static str) -> Result<String, ScrapeError> {
    let sel = selector(css)?;
    let element: ElementRef = document
        .select(&sel)
        .next()
        .ok_or(ScrapeError::MissingElement(marker))?;
    Ok(element.text().collect::<String>().trim().to_string())
}
