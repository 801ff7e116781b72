// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session identity chosen at the authentication gate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sign-in provider label. No external authentication happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Facebook,
    #[default]
    Guest,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Facebook => "facebook",
            Provider::Guest => "guest",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            "facebook" => Ok(Provider::Facebook),
            "guest" => Ok(Provider::Guest),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

/// The single remembered identity for this installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity: String,
    #[serde(default)]
    pub provider: Provider,
}

impl Session {
    pub fn new(identity: impl Into<String>, provider: Provider) -> Self {
        Self {
            identity: identity.into(),
            provider,
        }
    }

    /// Header label, e.g. `GUEST | Alex`.
    pub fn badge(&self) -> String {
        format!("{} | {}", self.provider.as_str().to_uppercase(), self.identity)
    }
}
