// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local journal.
//!
//! Each identity's journal is one JSON array. An append reads the whole
//! array, pushes the entry and rewrites it; there is no partial update.

use crate::error::{AppError, Result};
use crate::models::JournalEntry;
use crate::store::{keys, JournalStore, KeyValueStore};
use std::sync::Arc;

/// Journal over a key/value backend.
#[derive(Clone)]
pub struct KvJournal {
    backend: Arc<dyn KeyValueStore>,
    /// Maximum entries kept per identity (0 = unlimited)
    max_entries: usize,
}

impl KvJournal {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            max_entries: 0,
        }
    }

    /// Cap each identity's journal; the oldest entries are dropped first.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    fn load(&self, key: &str) -> Result<Vec<JournalEntry>> {
        match self.backend.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::Storage(format!("journal {} is unreadable: {}", key, e))),
            None => Ok(Vec::new()),
        }
    }
}

/// Storage key for an identity: case-folded, whitespace replaced by `_`.
///
/// Re-entering the same name later (in any case) reopens the same journal.
pub fn journal_key(identity: &str) -> String {
    let folded: String = identity
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{}{}", keys::JOURNAL_PREFIX, folded)
}

impl JournalStore for KvJournal {
    fn append(&self, identity: &str, entry: JournalEntry) -> Result<()> {
        if identity.trim().is_empty() {
            return Err(AppError::Validation(
                "journal identity must not be blank".to_string(),
            ));
        }
        let key = journal_key(identity);
        let mut entries = self.load(&key)?;
        entries.push(entry);

        if self.max_entries > 0 && entries.len() > self.max_entries {
            let excess = entries.len() - self.max_entries;
            entries.drain(..excess);
            tracing::debug!(key = %key, dropped = excess, "Journal over cap, dropped oldest");
        }

        let raw = serde_json::to_string(&entries).map_err(|e| AppError::Storage(e.to_string()))?;
        self.backend.put(&key, &raw)?;
        tracing::debug!(key = %key, len = entries.len(), "Journal entry appended");
        Ok(())
    }

    fn read_all(&self, identity: &str) -> Result<Vec<JournalEntry>> {
        self.load(&journal_key(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JournalKind, Provider};
    use crate::store::MemoryStore;

    fn entry(kind: JournalKind, n: u32) -> JournalEntry {
        JournalEntry {
            kind,
            provider: Provider::Guest,
            timestamp: format!("2026-03-02T10:00:0{}.000", n),
            payload: serde_json::json!({ "n": n }),
        }
    }

    #[test]
    fn test_journal_key_derivation() {
        assert_eq!(journal_key("Alex"), "entries_alex");
        assert_eq!(journal_key("Mary Jane"), "entries_mary_jane");
        assert_eq!(journal_key("MARY\tJANE"), "entries_mary_jane");
    }

    #[test]
    fn test_same_name_any_case_reopens_journal() {
        let journal = KvJournal::new(Arc::new(MemoryStore::new()));
        journal.append("Mary Jane", entry(JournalKind::Meal, 1)).unwrap();
        assert_eq!(journal.read_all("mary jane").unwrap().len(), 1);
    }

    #[test]
    fn test_entries_kept_in_submission_order() {
        let journal = KvJournal::new(Arc::new(MemoryStore::new()));
        journal.append("Alex", entry(JournalKind::Workout, 1)).unwrap();
        journal.append("Alex", entry(JournalKind::Meal, 2)).unwrap();
        let all = journal.read_all("Alex").unwrap();
        assert_eq!(all, vec![entry(JournalKind::Workout, 1), entry(JournalKind::Meal, 2)]);
        assert!(journal.read_all("Sam").unwrap().is_empty());
    }

    #[test]
    fn test_cap_drops_oldest() {
        let journal = KvJournal::new(Arc::new(MemoryStore::new())).with_max_entries(2);
        for n in 1..=3 {
            journal.append("Alex", entry(JournalKind::Meal, n)).unwrap();
        }
        let all = journal.read_all("Alex").unwrap();
        assert_eq!(all, vec![entry(JournalKind::Meal, 2), entry(JournalKind::Meal, 3)]);
    }

    #[test]
    fn test_blank_identity_rejected() {
        let backend = Arc::new(MemoryStore::new());
        let journal = KvJournal::new(backend.clone());
        assert!(journal.append(" ", entry(JournalKind::Meal, 1)).is_err());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let backend = Arc::new(MemoryStore::new());
        let journal = KvJournal::new(backend.clone());
        journal.append("Alex", entry(JournalKind::Workout, 1)).unwrap();
        let raw = backend.get("entries_alex").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["type"], "workout");
        assert_eq!(json[0]["provider"], "guest");
        assert_eq!(json[0]["payload"]["n"], 1);
    }
}
