// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Observable UI state.
//!
//! The whole presentation state lives in one `watch` channel. Every change
//! is a single `send_modify`, so subscribers only ever see whole states and
//! never a half-applied update.

use crate::models::{DashboardView, FormState, Provider, RecipeSuggestion, Session};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::watch;

/// Workspace modules. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    #[default]
    Dashboard,
    Workout,
    Meal,
    Plan,
    Recipes,
}

impl Module {
    pub const ALL: [Module; 5] = [
        Module::Dashboard,
        Module::Workout,
        Module::Meal,
        Module::Plan,
        Module::Recipes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::Workout => "workout",
            Module::Meal => "meal",
            Module::Plan => "plan",
            Module::Recipes => "recipes",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Module {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Module::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| format!("unknown module '{}'", s.trim()))
    }
}

/// Top-level presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Loading,
    AuthGate,
    Workspace { active: Module },
}

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub flow: FlowState,
    pub session: Option<Session>,
    /// Provider highlighted at the auth gate
    pub selected_provider: Provider,
    /// Last successful aggregation, replaced wholesale
    pub view: Option<Arc<DashboardView>>,
    /// Recipe search results shown instead of the default list
    pub recipe_results: Option<Vec<RecipeSuggestion>>,
    pub forms: FormState,
    /// One-line status, e.g. `Dashboard synced`
    pub status: String,
    /// Error banner
    pub error: Option<String>,
    /// Number of refreshes currently running
    pub in_flight: u32,
    /// Scroll position of the active module
    pub scroll_offset: u32,
    /// Bumped on every sign-in and sign-out
    pub session_epoch: u64,
}

impl UiState {
    pub fn is_syncing(&self) -> bool {
        self.in_flight > 0
    }

    /// Start a new session epoch. Refreshes from the old one are dropped.
    pub fn next_epoch(&mut self) {
        self.session_epoch = self.session_epoch.wrapping_add(1);
    }

    pub fn active_module(&self) -> Option<Module> {
        match self.flow {
            FlowState::Workspace { active } => Some(active),
            _ => None,
        }
    }

    /// Recipes to show: search results if present, else the default list.
    pub fn recipes(&self) -> &[RecipeSuggestion] {
        match (&self.recipe_results, &self.view) {
            (Some(results), _) => results.as_slice(),
            (None, Some(view)) => view.recipes.as_slice(),
            (None, None) => &[],
        }
    }
}

/// Shared handle to the UI state channel.
#[derive(Clone)]
pub struct UiStore {
    tx: Arc<watch::Sender<UiState>>,
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UiStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(UiState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Apply one atomic change and notify subscribers.
    pub fn update<F: FnOnce(&mut UiState)>(&self, f: F) {
        self.tx.send_modify(f);
    }

    /// Read without cloning. Do not hold across an `.await`.
    pub fn read<R>(&self, f: impl FnOnce(&UiState) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Clone of the current state.
    pub fn current(&self) -> UiState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.tx.subscribe()
    }

    pub fn set_status(&self, status: impl Into<String>) {
        let status = status.into();
        self.update(|s| s.status = status);
    }
}
