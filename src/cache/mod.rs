//! Cache module for persisting fetched response bodies to disk
//!
//! This module provides a flat key-value store mapping request URLs to raw
//! response bodies, persisted as a single JSON object. The cache never expires
//! entries and grows monotonically for the life of the storage file.

mod store;

pub use store::CacheStore;
