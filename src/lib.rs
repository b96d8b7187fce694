//! Parkscout Library
//!
//! This module exposes the cache, fetch, scrape, places, and session modules
//! for use in integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod fetch;
pub mod places;
pub mod scrape;
pub mod session;
