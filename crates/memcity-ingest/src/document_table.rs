use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// A single watched document's bookkeeping: its last-known content hash and
/// when it was last (re)read. The Ingestion Supervisor exclusively owns this
/// table (spec §3's ownership rule).
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentEntry {
    pub content_hash: u64,
    pub last_read: DateTime<Utc>,
}

/// Tracks every currently watched document's content hash, so a
/// filesystem-change event that doesn't actually change bytes (a touch, a
/// save-with-no-edits) can be discarded (spec §4.4).
#[derive(Debug, Clone, Default)]
pub struct DocumentTable {
    entries: HashMap<PathBuf, DocumentEntry>,
}

impl DocumentTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hash_of(&self, path: &Path) -> Option<u64> {
        self.entries.get(path).map(|e| e.content_hash)
    }

    /// Records `hash` for `path`, overwriting any prior entry. Returns
    /// `true` if this is a genuine change (new path, or a different hash).
    pub fn upsert(&mut self, path: PathBuf, hash: u64, now: DateTime<Utc>) -> bool {
        let changed = self.entries.get(&path).is_none_or(|e| e.content_hash != hash);
        self.entries.insert(path, DocumentEntry { content_hash: hash, last_read: now });
        changed
    }

    /// Drops `path`'s entry, e.g. on file deletion (spec §4.4 step 1).
    pub fn remove(&mut self, path: &Path) {
        self.entries.remove(path);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
