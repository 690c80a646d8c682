#![allow(dead_code)]

//! Recently-viewed tracking: a bounded, most-recent-first list of viewed
//! fragrances, unique by slug, persisted through a pluggable key-value
//! backend. On the website this state lives in browser storage under the
//! same key and wire format; the store here is the embeddable counterpart
//! used by native shells and tests.
//!
//! Storage is synchronous and best-effort: every backend failure is logged
//! and degrades to an empty list or a skipped write, never an error to the
//! caller. Two writers may race; last write wins.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Storage key holding the serialized list.
pub const STORAGE_KEY: &str = "sillage_recently_viewed";

/// Entries beyond this cap age out; there is no time-based expiry.
pub const MAX_RECENTLY_VIEWED: usize = 6;

/// One viewed fragrance. Field names follow the browser wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentlyViewedEntry {
    pub slug: String,
    pub name: String,
    pub brand_name: String,
    pub image_url: Option<String>,
    /// View time in unix milliseconds.
    pub timestamp: i64,
}

/// A fragrance being recorded as viewed; the store stamps the timestamp.
#[derive(Debug, Clone, Copy)]
pub struct ViewedFragrance<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub brand_name: &'a str,
    pub image_url: Option<&'a str>,
}

/// Minimal key-value persistence capability. Implementations are expected
/// to be cheap and synchronous; durability is best-effort.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory backend, used by tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryBackend {
    values: Mutex<HashMap<String, String>>,
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("storage mutex poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("storage mutex poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File backend: one JSON file per key inside a directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context("reading storage file"),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir).context("creating storage directory")?;
        std::fs::write(self.path(key), value).context("writing storage file")
    }
}

/// The bounded recently-viewed list over a storage backend.
pub struct RecentlyViewedStore<B: StorageBackend> {
    backend: B,
    entries: Vec<RecentlyViewedEntry>,
}

impl<B: StorageBackend> RecentlyViewedStore<B> {
    /// Loads once from storage. A failed read or unparseable payload is
    /// treated as an empty list.
    pub fn new(backend: B) -> Self {
        let entries = match backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding unparseable recently-viewed payload: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read recently-viewed list: {e}");
                Vec::new()
            }
        };
        Self { backend, entries }
    }

    /// Records a view: any entry with the same slug moves to the front as a
    /// fresh entry, the list is truncated to `MAX_RECENTLY_VIEWED`, and the
    /// result is written back. Write failures are logged and the in-memory
    /// state keeps the new entry.
    pub fn add_fragrance(&mut self, view: ViewedFragrance<'_>) {
        self.entries.retain(|e| e.slug != view.slug);
        self.entries.insert(
            0,
            RecentlyViewedEntry {
                slug: view.slug.to_string(),
                name: view.name.to_string(),
                brand_name: view.brand_name.to_string(),
                image_url: view.image_url.map(str::to_string),
                timestamp: Utc::now().timestamp_millis(),
            },
        );
        self.entries.truncate(MAX_RECENTLY_VIEWED);

        match serde_json::to_string(&self.entries) {
            Ok(raw) => {
                if let Err(e) = self.backend.set(STORAGE_KEY, &raw) {
                    warn!("Failed to persist recently-viewed list: {e}");
                }
            }
            Err(e) => warn!("Failed to serialize recently-viewed list: {e}"),
        }
    }

    /// Current list, most recent first.
    pub fn entries(&self) -> &[RecentlyViewedEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(slug: &str) -> ViewedFragrance<'_> {
        ViewedFragrance {
            slug,
            name: "Some Fragrance",
            brand_name: "Some Brand",
            image_url: None,
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = RecentlyViewedStore::new(MemoryBackend::default());
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_most_recent_first() {
        let mut store = RecentlyViewedStore::new(MemoryBackend::default());
        store.add_fragrance(view("first"));
        store.add_fragrance(view("second"));
        let slugs: Vec<_> = store.entries().iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, ["second", "first"]);
    }

    #[test]
    fn test_seventh_view_evicts_oldest() {
        let mut store = RecentlyViewedStore::new(MemoryBackend::default());
        for slug in ["a", "b", "c", "d", "e", "f", "g"] {
            store.add_fragrance(view(slug));
        }
        let slugs: Vec<_> = store.entries().iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, ["g", "f", "e", "d", "c", "b"]);
    }

    #[test]
    fn test_reviewing_moves_to_front_without_duplicate() {
        let mut store = RecentlyViewedStore::new(MemoryBackend::default());
        store.add_fragrance(view("a"));
        store.add_fragrance(view("b"));
        store.add_fragrance(view("a"));
        let slugs: Vec<_> = store.entries().iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "b"]);
    }

    #[test]
    fn test_persists_and_reloads() {
        let backend = MemoryBackend::default();
        {
            let mut store = RecentlyViewedStore::new(&backend);
            store.add_fragrance(view("kept"));
        }
        let reloaded = RecentlyViewedStore::new(&backend);
        assert_eq!(reloaded.entries().len(), 1);
        assert_eq!(reloaded.entries()[0].slug, "kept");
    }

    #[test]
    fn test_corrupt_payload_treated_as_empty() {
        let backend = MemoryBackend::default();
        backend.set(STORAGE_KEY, "not json").unwrap();
        let store = RecentlyViewedStore::new(&backend);
        assert!(store.entries().is_empty());
    }

    struct FailingBackend;

    impl StorageBackend for FailingBackend {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            anyhow::bail!("storage unavailable")
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            anyhow::bail!("storage unavailable")
        }
    }

    #[test]
    fn test_storage_failures_never_panic() {
        let mut store = RecentlyViewedStore::new(FailingBackend);
        store.add_fragrance(view("a"));
        // the in-memory list still advances even though the write failed
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = RecentlyViewedStore::new(FileBackend::new(dir.path()));
            store.add_fragrance(view("on-disk"));
        }
        let reloaded = RecentlyViewedStore::new(FileBackend::new(dir.path()));
        assert_eq!(reloaded.entries()[0].slug, "on-disk");
    }

    #[test]
    fn test_wire_format_field_names() {
        let entry = RecentlyViewedEntry {
            slug: "s".into(),
            name: "n".into(),
            brand_name: "b".into(),
            image_url: None,
            timestamp: 0,
        };
        let raw = serde_json::to_string(&entry).unwrap();
        assert!(raw.contains("\"brandName\""));
        assert!(raw.contains("\"imageUrl\""));
    }
}
