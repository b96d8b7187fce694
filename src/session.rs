//! Interactive session loop
//!
//! A single-threaded, blocking, prompt-driven state machine: the user names
//! a state, picks a site from the numbered listing, sees nearby places, and
//! can go "back" to the state prompt or "exit" from either prompt. Input
//! validation errors are recoverable (printed and re-prompted); network and
//! parse failures are fatal and propagate out of `run`.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::cache::CacheStore;
use crate::data::{Place, Site};
use crate::fetch::{CachedFetcher, FetchError};
use crate::places::{NearbyPlacesClient, PlacesError};
use crate::scrape::{
    build_state_index, extract_site, extract_site_urls, ScrapeError, StateIndexError,
};

/// Divider line printed around list headers
const DIVIDER: &str = "-------------------------------------------";

/// Prompt shown when awaiting a state name
const STATE_PROMPT: &str = "Enter a state name (e.g. Michigan, michigan) or \"exit\"\n: ";

/// Prompt shown when awaiting a site selection
const SELECTION_PROMPT: &str = "Choose the number for detail search or \"exit\" or \"back\"\n: ";

/// Fatal failures that terminate the session
#[derive(Debug, Error)]
pub enum SessionError {
    /// A page or API fetch failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A page did not have the expected structure
    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    /// The state directory could not be built
    #[error(transparent)]
    StateIndex(#[from] StateIndexError),

    /// The nearby-places response was malformed
    #[error(transparent)]
    Places(#[from] PlacesError),

    /// Reading user input failed
    #[error("Failed to read input: {0}")]
    Input(#[from] io::Error),
}

/// Recoverable validation errors for selection input
///
/// Never propagates out of the loop; each variant is answered with a printed
/// message and a re-prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The input was neither a command nor a number
    #[error("not a number: {0}")]
    NotANumber(String),

    /// The number was outside the displayed list
    #[error("{given} is out of range 1..={count}")]
    OutOfRange { given: usize, count: usize },
}

/// Parsed input at the state-name prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateCommand {
    /// Terminate the session
    Exit,
    /// Look up the named state (trimmed and lowercased)
    Lookup(String),
}

/// Parsed input at the selection prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionCommand {
    /// Terminate the session
    Exit,
    /// Return to the state-name prompt
    Back,
    /// Show places near the site at this 1-based position
    Pick(usize),
}

/// Parses state-prompt input; "exit" is case-insensitive
pub fn parse_state_input(input: &str) -> StateCommand {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("exit") {
        StateCommand::Exit
    } else {
        StateCommand::Lookup(trimmed.to_lowercase())
    }
}

/// Parses selection-prompt input against a list of `count` sites
///
/// "exit" is case-insensitive; "back" is a case-sensitive literal. A number
/// is accepted only in `1..=count`, so `0` is rejected as out of range.
pub fn parse_selection_input(input: &str, count: usize) -> Result<SelectionCommand, InputError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("exit") {
        return Ok(SelectionCommand::Exit);
    }
    if trimmed == "back" {
        return Ok(SelectionCommand::Back);
    }
    let number: usize = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if (1..=count).contains(&number) {
        Ok(SelectionCommand::Pick(number))
    } else {
        Err(InputError::OutOfRange {
            given: number,
            count,
        })
    }
}

/// Renders the numbered site list for a state
///
/// Numbering follows the order the sites were extracted in, which is the
/// listing page's document order.
pub fn render_site_list(state: &str, sites: &[Site]) -> String {
    let mut out = String::new();
    out.push_str(DIVIDER);
    out.push('\n');
    out.push_str(&format!("List of national sites in {}\n", state));
    out.push_str(DIVIDER);
    out.push('\n');
    for (position, site) in sites.iter().enumerate() {
        out.push_str(&format!("[{}] {}\n", position + 1, site.info()));
    }
    out
}

/// Renders the bulleted nearby-places list for a site
pub fn render_places(site_name: &str, places: &[Place]) -> String {
    let mut out = String::new();
    out.push_str(DIVIDER);
    out.push('\n');
    out.push_str(&format!("Places near {}\n", site_name));
    out.push_str(DIVIDER);
    out.push('\n');
    for place in places {
        out.push_str(&format!("- {}\n", place.info()));
    }
    out
}

/// Interactive session over the parks directory
///
/// Owns the cache store for its whole lifetime; every fetch goes through it.
pub struct Session {
    fetcher: CachedFetcher,
    cache: CacheStore,
    places: NearbyPlacesClient,
}

impl Session {
    /// Creates a session from its collaborators
    pub fn new(fetcher: CachedFetcher, cache: CacheStore, places: NearbyPlacesClient) -> Self {
        Self {
            fetcher,
            cache,
            places,
        }
    }

    /// Builds the site list for one state listing URL
    ///
    /// Fetches the listing page, then each detail page in listing order.
    /// The returned order determines the display numbering.
    pub async fn sites_for_state(&mut self, state_url: &str) -> Result<Vec<Site>, SessionError> {
        let listing = self.fetcher.fetch_text(state_url, &mut self.cache).await?;
        let urls = extract_site_urls(&listing)?;

        let mut sites = Vec::with_capacity(urls.len());
        for url in &urls {
            let page = self.fetcher.fetch_text(url, &mut self.cache).await?;
            sites.push(extract_site(&page)?);
        }
        Ok(sites)
    }

    /// Runs the prompt loop until the user exits or input ends
    ///
    /// EOF on stdin terminates like "exit". Unknown state names and invalid
    /// selections re-prompt in place; everything else is fatal.
    pub async fn run(&mut self) -> Result<(), SessionError> {
        let index = build_state_index(&self.fetcher, &mut self.cache).await?;

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        'state: loop {
            let Some(line) = prompt(&mut lines, STATE_PROMPT)? else {
                break;
            };
            let name = match parse_state_input(&line) {
                StateCommand::Exit => break,
                StateCommand::Lookup(name) => name,
            };
            let Some(state_url) = resolve_state(&name, &index) else {
                println!("[Error] Enter proper state name");
                continue;
            };

            let sites = self.sites_for_state(state_url).await?;
            print!("{}", render_site_list(&name, &sites));

            loop {
                let Some(selection) = prompt(&mut lines, SELECTION_PROMPT)? else {
                    break 'state;
                };
                match parse_selection_input(&selection, sites.len()) {
                    Ok(SelectionCommand::Exit) => break 'state,
                    Ok(SelectionCommand::Back) => continue 'state,
                    Ok(SelectionCommand::Pick(position)) => {
                        let site = &sites[position - 1];
                        let places = self
                            .places
                            .fetch_nearby(site, &self.fetcher, &mut self.cache)
                            .await?;
                        print!("{}", render_places(&site.name, &places));
                    }
                    Err(_) => {
                        println!("[Error] Invalid Input");
                        println!("{}", DIVIDER);
                    }
                }
            }
        }
        Ok(())
    }

}

/// Prints a prompt and reads one line; `None` means end of input
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<Option<String>, SessionError> {
    print!("{}", text);
    io::stdout().flush().map_err(SessionError::Input)?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Looks up a state name (already lowercased) in the index
pub fn resolve_state<'a>(name: &str, index: &'a HashMap<String, String>) -> Option<&'a str> {
    index.get(name).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sites(count: usize) -> Vec<Site> {
        (0..count)
            .map(|i| Site {
                category: "National Park".to_string(),
                name: format!("Site {}", i + 1),
                address: "Houghton, MI".to_string(),
                zipcode: "49931".to_string(),
                phone: "555-0100".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_parse_state_input_exit_is_case_insensitive() {
        assert_eq!(parse_state_input("exit"), StateCommand::Exit);
        assert_eq!(parse_state_input("EXIT"), StateCommand::Exit);
        assert_eq!(parse_state_input(" Exit "), StateCommand::Exit);
    }

    #[test]
    fn test_parse_state_input_lowercases_lookup() {
        assert_eq!(
            parse_state_input("Michigan"),
            StateCommand::Lookup("michigan".to_string())
        );
        assert_eq!(
            parse_state_input("  new mexico "),
            StateCommand::Lookup("new mexico".to_string())
        );
    }

    #[test]
    fn test_parse_selection_exit_is_case_insensitive() {
        assert_eq!(
            parse_selection_input("Exit", 3),
            Ok(SelectionCommand::Exit)
        );
    }

    #[test]
    fn test_parse_selection_back_is_case_sensitive() {
        assert_eq!(parse_selection_input("back", 3), Ok(SelectionCommand::Back));
        assert_eq!(
            parse_selection_input("Back", 3),
            Err(InputError::NotANumber("Back".to_string()))
        );
    }

    #[test]
    fn test_parse_selection_accepts_in_range_numbers() {
        assert_eq!(parse_selection_input("1", 3), Ok(SelectionCommand::Pick(1)));
        assert_eq!(parse_selection_input("3", 3), Ok(SelectionCommand::Pick(3)));
    }

    #[test]
    fn test_parse_selection_rejects_zero_and_above_count() {
        assert_eq!(
            parse_selection_input("0", 3),
            Err(InputError::OutOfRange { given: 0, count: 3 })
        );
        assert_eq!(
            parse_selection_input("4", 3),
            Err(InputError::OutOfRange { given: 4, count: 3 })
        );
    }

    #[test]
    fn test_parse_selection_rejects_non_numeric() {
        assert_eq!(
            parse_selection_input("two", 3),
            Err(InputError::NotANumber("two".to_string()))
        );
        assert_eq!(
            parse_selection_input("-1", 3),
            Err(InputError::NotANumber("-1".to_string()))
        );
    }

    #[test]
    fn test_render_site_list_numbers_from_one() {
        let rendered = render_site_list("michigan", &test_sites(3));
        assert!(rendered.contains("List of national sites in michigan"));
        assert!(rendered.contains("[1] Site 1 (National Park): Houghton, MI 49931"));
        assert!(rendered.contains("[2] Site 2"));
        assert!(rendered.contains("[3] Site 3"));
    }

    #[test]
    fn test_render_site_list_order_matches_input_order() {
        let rendered = render_site_list("michigan", &test_sites(3));
        let first = rendered.find("[1] Site 1").expect("first entry");
        let second = rendered.find("[2] Site 2").expect("second entry");
        let third = rendered.find("[3] Site 3").expect("third entry");
        assert!(first < second && second < third);
    }

    #[test]
    fn test_render_places_bullets() {
        let places = vec![
            Place {
                name: "Lakeside Diner".to_string(),
                category: "Restaurants".to_string(),
                address: "12 Shore Rd".to_string(),
                city: "Houghton".to_string(),
            },
            Place {
                name: "Trailhead".to_string(),
                category: "no category".to_string(),
                address: "no address".to_string(),
                city: "no city".to_string(),
            },
        ];

        let rendered = render_places("Isle Royale", &places);
        assert!(rendered.contains("Places near Isle Royale"));
        assert!(rendered.contains("- Lakeside Diner (Restaurants): 12 Shore Rd, Houghton"));
        assert!(rendered.contains("- Trailhead (no category): no address, no city"));
    }

    #[test]
    fn test_resolve_state_is_pure_lookup() {
        let mut index = HashMap::new();
        index.insert(
            "michigan".to_string(),
            "https://www.nps.gov/state/mi/index.htm".to_string(),
        );

        assert_eq!(
            resolve_state("michigan", &index),
            Some("https://www.nps.gov/state/mi/index.htm")
        );
        assert_eq!(resolve_state("atlantis", &index), None);
    }
}
