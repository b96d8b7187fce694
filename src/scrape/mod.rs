//! HTML extraction routines for the parks directory
//!
//! Each extractor parses one fixed page structure: the state navigation
//! dropdown on the base page, the per-state listing of site links, and the
//! per-site detail page. The extractors are brittle to upstream page
//! redesign on purpose: a missing expected marker is a fatal parse error,
//! never a partial record.

mod listing;
mod site;
mod states;

pub use listing::extract_site_urls;
pub use site::extract_site;
pub use states::{build_state_index, parse_state_index, StateIndexError, BASE_URL};

use scraper::Selector;
use thiserror::Error;

/// Errors that can occur while extracting structured data from a page
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A CSS selector failed to compile
    #[error("Invalid selector `{0}`")]
    InvalidSelector(String),

    /// An expected structural marker was absent from the page
    #[error("Expected page structure not found: {0}")]
    MissingElement(&'static str),

    /// A link element was present but carried no href attribute
    #[error("Link without href in {0}")]
    MissingHref(&'static str),
}

/// Compiles a CSS selector, mapping the failure into `ScrapeError`
fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::InvalidSelector(css.to_string()))
}
