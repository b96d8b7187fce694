//! Flat key-value cache persisted as a single JSON file
//!
//! Provides a `CacheStore` that maps request URLs to raw response bodies.
//! The whole mapping is read once at startup and rewritten in full after
//! every mutation, so entries survive process restarts.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistent string-to-string cache keyed by request URL
///
/// Keys are exact URL strings (no normalization), so two URLs differing only
/// in query parameter order are distinct entries. A write to an existing key
/// overwrites it (last writer wins). Entries are never evicted or expired.
///
/// The store assumes a single-process, single-threaded caller; concurrent
/// processes sharing the same file may silently lose updates.
#[derive(Debug)]
pub struct CacheStore {
    /// File backing the cache
    path: PathBuf,
    /// The in-memory mapping, mirrored to disk on every put
    entries: HashMap<String, String>,
}

impl CacheStore {
    /// Loads the cache from the given file path
    ///
    /// On any failure (missing file, unreadable file, malformed JSON) an
    /// empty store is returned; this never errors.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    /// Creates an empty store backed by the given path, ignoring any
    /// existing file content (for testing)
    #[allow(dead_code)]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: HashMap::new(),
        }
    }

    /// Looks up a cached response body by its exact URL key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts or overwrites an entry, then rewrites the whole file
    ///
    /// Persistence is synchronous and whole-file (no append). The parent
    /// directory is created on first write if it does not exist yet.
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err` if serialization or the file write fails
    pub fn put(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    /// Number of entries currently in the store
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the file backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the full mapping to the backing file
    fn persist(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}
