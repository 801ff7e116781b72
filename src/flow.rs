// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presentation flow: loading, auth gate, workspace.
//!
//! ```text
//! Loading ──(no session)──▶ AuthGate ──(name saved)──▶ Workspace
//!    └─────(session restored)────────────────────────▶ Workspace
//! Workspace ──(sign out)──▶ AuthGate
//! ```
//!
//! Loading lasts a fixed delay and never waits on the network. The first
//! refresh runs after the workspace is entered, so a failing API shows an
//! error banner inside the workspace instead of blocking entry.

use crate::error::{AppError, Result};
use crate::models::{DashboardView, FormField, JournalEntry, Provider, RecipeSuggestion, Session};
use crate::services::WriteReceipt;
use crate::state::{FlowState, Module};
use crate::AppState;
use std::sync::Arc;

pub const AUTH_PROMPT: &str = "Choose a provider and enter your name";
pub const BLANK_NAME: &str = "Enter your name to continue";

/// Drives [`FlowState`] and routes user actions to the services.
#[derive(Clone)]
pub struct FlowController {
    state: Arc<AppState>,
}

impl FlowController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub fn app(&self) -> &AppState {
        &self.state
    }

    /// Run the loading screen, then auto-login or show the auth gate.
    pub async fn start(&self) -> FlowState {
        let delay = self.state.config.loading_delay;
        self.state.ui.update(|s| {
            s.flow = FlowState::Loading;
            s.status = "Loading...".to_string();
        });
        tokio::time::sleep(delay).await;

        let restored = match self.state.sessions.restore() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable stored session");
                None
            }
        };

        match restored {
            Some(session) => {
                tracing::info!(identity = %session.identity, provider = %session.provider, "Session restored");
                self.enter_workspace(session).await;
            }
            None => {
                tracing::info!("No stored session, showing auth gate");
                self.state.ui.update(|s| {
                    s.flow = FlowState::AuthGate;
                    s.status = AUTH_PROMPT.to_string();
                });
            }
        }
        self.flow()
    }

    pub fn flow(&self) -> FlowState {
        self.state.ui.read(|s| s.flow)
    }

    /// Highlight a provider at the auth gate.
    pub fn select_provider(&self, provider: Provider) {
        self.state.ui.update(|s| {
            s.selected_provider = provider;
            s.status = format!("Provider: {}", provider);
        });
    }

    /// Complete the auth gate with the typed name.
    ///
    /// A blank name leaves the flow on the gate with a status message.
    pub async fn complete_auth(&self, name: &str) -> Result<Session> {
        if self.flow() != FlowState::AuthGate {
            return Err(self.refuse("Sign out first"));
        }

        let identity = name.trim();
        if identity.is_empty() {
            return Err(self.refuse(BLANK_NAME));
        }

        let provider = self.state.ui.read(|s| s.selected_provider);
        let session = Session::new(identity, provider);
        if let Err(e) = self.state.sessions.save(&session) {
            self.state.ui.update(|s| {
                s.status = format!("Login error: {}", e);
                s.error = Some(e.user_message());
            });
            return Err(e);
        }

        tracing::info!(identity = %session.identity, provider = %session.provider, "Signed in");
        self.enter_workspace(session.clone()).await;
        Ok(session)
    }

    /// Enter the workspace on the dashboard and run the first refresh.
    async fn enter_workspace(&self, session: Session) {
        self.state.ui.update(|s| {
            s.status = format!("Welcome, {}", session.identity);
            s.session = Some(session);
            s.flow = FlowState::Workspace {
                active: Module::Dashboard,
            };
            s.error = None;
            s.scroll_offset = 0;
            s.next_epoch();
        });

        // Failure is already on the banner; entry never depends on it.
        let _ = self.state.aggregator.refresh().await;
    }

    /// Focus a workspace module. Returns false if nothing changed.
    pub fn select_module(&self, module: Module) -> bool {
        let mut changed = false;
        self.state.ui.update(|s| {
            if let FlowState::Workspace { active } = s.flow {
                if active != module {
                    s.flow = FlowState::Workspace { active: module };
                    s.scroll_offset = 0;
                    changed = true;
                }
            }
        });
        if changed {
            tracing::debug!(module = %module, "Module selected");
        }
        changed
    }

    /// Move the scroll position of the active module, clamped at the top.
    pub fn scroll(&self, lines: i64) {
        self.state.ui.update(|s| {
            let next = i64::from(s.scroll_offset).saturating_add(lines).max(0);
            s.scroll_offset = u32::try_from(next).unwrap_or(u32::MAX);
        });
    }

    /// Forget the stored session and go back to the auth gate.
    pub fn sign_out(&self) -> Result<()> {
        self.state.sessions.clear()?;
        let previous = self.state.ui.read(|s| s.session.clone());
        self.state.ui.update(|s| {
            s.flow = FlowState::AuthGate;
            s.session = None;
            s.view = None;
            s.recipe_results = None;
            s.forms = Default::default();
            s.error = None;
            s.scroll_offset = 0;
            s.status = "Signed out".to_string();
            s.next_epoch();
        });
        if let Some(session) = previous {
            tracing::info!(identity = %session.identity, "Signed out");
        }
        Ok(())
    }

    pub async fn refresh(&self) -> Result<Arc<DashboardView>> {
        self.require_workspace()?;
        self.state.aggregator.refresh().await
    }

    pub async fn submit_workout(&self) -> Result<WriteReceipt> {
        self.require_workspace()?;
        self.state.coordinator.submit_workout().await
    }

    pub async fn submit_meal(&self) -> Result<WriteReceipt> {
        self.require_workspace()?;
        self.state.coordinator.submit_meal().await
    }

    pub async fn submit_profile(&self) -> Result<WriteReceipt> {
        self.require_workspace()?;
        self.state.coordinator.submit_profile().await
    }

    pub async fn search_recipes(&self) -> Result<Vec<RecipeSuggestion>> {
        self.require_workspace()?;
        self.state.coordinator.search_recipes().await
    }

    /// Set one form field from raw text.
    pub fn edit_form(&self, field: FormField, value: &str) -> Result<()> {
        let mut result = Ok(());
        self.state.ui.update(|s| {
            result = s.forms.set(field, value);
            if let Err(e) = &result {
                s.status = e.user_message();
            }
        });
        result
    }

    /// Journal of the signed-in identity; empty when signed out.
    pub fn journal(&self) -> Result<Vec<JournalEntry>> {
        match self.state.ui.read(|s| s.session.clone()) {
            Some(session) => self.state.journal.read_all(&session.identity),
            None => Ok(Vec::new()),
        }
    }

    fn require_workspace(&self) -> Result<()> {
        match self.flow() {
            FlowState::Workspace { .. } => Ok(()),
            _ => Err(self.refuse("Sign in first")),
        }
    }

    fn refuse(&self, message: &str) -> AppError {
        self.state.ui.set_status(message);
        AppError::Validation(message.to_string())
    }
}
