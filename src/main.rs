//! Parkscout - browse U.S. national park sites by state
//!
//! An interactive command-line tool that scrapes the national parks
//! directory for sites in a chosen state and enriches a selected site with
//! nearby points of interest from the MapQuest radius search API. Every
//! request goes through a persistent on-disk cache.

use clap::Parser;

use parkscout::cache::CacheStore;
use parkscout::cli::{Cli, StartupConfig};
use parkscout::fetch::CachedFetcher;
use parkscout::places::NearbyPlacesClient;
use parkscout::session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli)?;

    // Load once at startup; a missing or corrupt file is an empty cache.
    let cache = CacheStore::load(config.cache_path);
    let fetcher = CachedFetcher::new()?;
    let places = NearbyPlacesClient::new(config.api_key);

    let mut session = Session::new(fetcher, cache, places);
    session.run().await?;
    Ok(())
}
