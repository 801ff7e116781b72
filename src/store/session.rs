// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session & identity store.

use crate::error::{AppError, Result};
use crate::models::Session;
use crate::store::{keys, KeyValueStore, SessionStore};
use std::sync::Arc;

/// Stores the one remembered session under a single global key.
#[derive(Clone)]
pub struct KvSessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl KvSessionStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }
}

impl SessionStore for KvSessionStore {
    fn restore(&self) -> Result<Option<Session>> {
        let Some(raw) = self.backend.get(keys::SESSION)? else {
            return Ok(None);
        };
        let session: Session = serde_json::from_str(&raw)
            .map_err(|e| AppError::Storage(format!("stored session is unreadable: {}", e)))?;

        // A blank name never passes the auth gate; treat it as signed out
        if session.identity.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<()> {
        if session.identity.trim().is_empty() {
            return Err(AppError::Validation("Enter your name to continue".to_string()));
        }
        let raw = serde_json::to_string(session).map_err(|e| AppError::Storage(e.to_string()))?;
        self.backend.put(keys::SESSION, &raw)?;
        tracing::info!(identity = %session.identity, provider = %session.provider, "Session saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.backend.remove(keys::SESSION)?;
        tracing::info!("Session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Provider;
    use crate::store::MemoryStore;

    fn store() -> (KvSessionStore, Arc<MemoryStore>) {
        let backend = Arc::new(MemoryStore::new());
        (KvSessionStore::new(backend.clone()), backend)
    }

    #[test]
    fn test_restore_without_save_is_none() {
        let (sessions, _) = store();
        assert_eq!(sessions.restore().unwrap(), None);
    }

    #[test]
    fn test_save_then_restore() {
        let (sessions, _) = store();
        sessions
            .save(&Session::new("Alex", Provider::Guest))
            .unwrap();
        assert_eq!(
            sessions.restore().unwrap(),
            Some(Session::new("Alex", Provider::Guest))
        );
    }

    #[test]
    fn test_only_one_session_is_remembered() {
        let (sessions, _) = store();
        sessions.save(&Session::new("Alex", Provider::Guest)).unwrap();
        sessions.save(&Session::new("Sam", Provider::Google)).unwrap();
        assert_eq!(
            sessions.restore().unwrap(),
            Some(Session::new("Sam", Provider::Google))
        );
    }

    #[test]
    fn test_clear_forgets_session() {
        let (sessions, _) = store();
        sessions.save(&Session::new("Alex", Provider::Facebook)).unwrap();
        sessions.clear().unwrap();
        assert_eq!(sessions.restore().unwrap(), None);
    }

    #[test]
    fn test_blank_identity_rejected() {
        let (sessions, backend) = store();
        assert!(sessions.save(&Session::new("  ", Provider::Guest)).is_err());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_missing_provider_defaults_to_guest() {
        let (sessions, backend) = store();
        backend.put(keys::SESSION, r#"{"identity":"Alex"}"#).unwrap();
        assert_eq!(
            sessions.restore().unwrap().map(|s| s.provider),
            Some(Provider::Guest)
        );
    }

    #[test]
    fn test_corrupt_session_is_a_storage_error() {
        let (sessions, backend) = store();
        backend.put(keys::SESSION, "not json").unwrap();
        assert!(matches!(sessions.restore(), Err(AppError::Storage(_))));
    }
}
