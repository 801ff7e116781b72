// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local journal of confirmed writes.

use crate::models::Provider;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalKind {
    Workout,
    Meal,
}

impl fmt::Display for JournalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JournalKind::Workout => f.write_str("workout"),
            JournalKind::Meal => f.write_str("meal"),
        }
    }
}

/// One confirmed write, as recorded after the server acknowledged it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(rename = "type")]
    pub kind: JournalKind,
    pub provider: Provider,
    /// Local wall-clock time of the submission (ISO 8601, no offset)
    pub timestamp: String,
    /// Structured copy of the submitted entry
    pub payload: serde_json::Value,
}

impl JournalEntry {
    pub fn new<T: Serialize>(
        kind: JournalKind,
        provider: Provider,
        timestamp: String,
        submitted: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            kind,
            provider,
            timestamp,
            payload: serde_json::to_value(submitted)?,
        })
    }
}
