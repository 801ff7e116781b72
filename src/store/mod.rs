// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-local persistence.
//!
//! Callers depend on [`SessionStore`] and [`JournalStore`], never on a
//! concrete medium. Both are implemented over a [`KeyValueStore`] backend,
//! which is either in memory (tests) or a directory of JSON files.

pub mod file;
pub mod journal;
pub mod memory;
pub mod session;

pub use file::FileStore;
pub use journal::KvJournal;
pub use memory::MemoryStore;
pub use session::KvSessionStore;

use crate::error::Result;
use crate::models::{JournalEntry, Session};

/// Key names as constants.
pub mod keys {
    /// The single remembered session (installation-wide)
    pub const SESSION: &str = "session";
    /// Prefix of per-identity journal keys
    pub const JOURNAL_PREFIX: &str = "entries_";
}

/// String key/value storage, the shape of platform preference stores.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Remembers which identity is signed in across restarts.
pub trait SessionStore: Send + Sync {
    /// The stored session, or `None` if nobody has signed in.
    fn restore(&self) -> Result<Option<Session>>;
    /// Replace the stored session.
    fn save(&self, session: &Session) -> Result<()>;
    /// Forget the stored session (sign out).
    fn clear(&self) -> Result<()>;
}

/// Append-only per-identity record of confirmed writes.
pub trait JournalStore: Send + Sync {
    fn append(&self, identity: &str, entry: JournalEntry) -> Result<()>;
    /// Entries in submission order.
    fn read_all(&self, identity: &str) -> Result<Vec<JournalEntry>>;
}
