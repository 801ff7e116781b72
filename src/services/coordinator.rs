// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Write coordination.
//!
//! Handles the write workflow:
//! 1. Build the request from the form and validate it locally
//! 2. Submit it to the API
//! 3. Append a journal entry for the identity in effect at submission
//! 4. Clear the fields that do not carry over
//! 5. Refresh the dashboard
//!
//! A validation failure stops at step 1: no request, no journal entry. A
//! remote failure stops at step 2 and leaves the form as typed.

use crate::error::{AppError, Result};
use crate::models::{JournalEntry, JournalKind, Provider, RecipeSuggestion, Session};
use crate::services::gateway::WriteAck;
use crate::services::{ApiGateway, DashboardAggregator};
use crate::state::UiStore;
use crate::store::JournalStore;
use crate::time_utils::{local_timestamp, today_iso};
use std::sync::Arc;

#[derive(Clone)]
pub struct WriteCoordinator {
    gateway: ApiGateway,
    journal: Arc<dyn JournalStore>,
    aggregator: DashboardAggregator,
    ui: UiStore,
}

/// Outcome of a successful write.
#[derive(Debug, Clone)]
pub struct WriteReceipt {
    pub ack: WriteAck,
    /// The journal entry recorded, if a session was active
    pub journaled: Option<JournalEntry>,
    /// Whether the follow-up refresh succeeded
    pub refreshed: bool,
}

impl WriteCoordinator {
    pub fn new(
        gateway: ApiGateway,
        journal: Arc<dyn JournalStore>,
        aggregator: DashboardAggregator,
        ui: UiStore,
    ) -> Self {
        Self {
            gateway,
            journal,
            aggregator,
            ui,
        }
    }

    /// Submit the workout form.
    pub async fn submit_workout(&self) -> Result<WriteReceipt> {
        let (form, session) = self
            .ui
            .read(|s| (s.forms.workout.clone(), s.session.clone()));

        let entry = match form.to_entry(&today_iso(), session.as_ref()) {
            Ok(entry) => entry,
            Err(e) => return Err(self.reject("Workout", e)),
        };

        self.ui.set_status("Logging workout...");
        let ack = match self.gateway.log_workout(&entry).await {
            Ok(ack) => ack,
            Err(e) => return Err(self.reject("Workout", e)),
        };
        tracing::info!(exercise = %entry.exercise, date = %entry.date, "Workout logged");

        let journaled = self.record(JournalKind::Workout, session.as_ref(), &entry);
        self.ui.update(|s| {
            s.forms.workout.clear_after_submit();
            s.error = None;
            s.status = logged_status("Workout", session.as_ref());
        });

        let refreshed = self.aggregator.refresh().await.is_ok();
        Ok(WriteReceipt {
            ack,
            journaled,
            refreshed,
        })
    }

    /// Submit the meal form.
    pub async fn submit_meal(&self) -> Result<WriteReceipt> {
        let (form, session) = self
            .ui
            .read(|s| (s.forms.meal.clone(), s.session.clone()));

        let entry = match form.to_entry(&today_iso(), session.as_ref()) {
            Ok(entry) => entry,
            Err(e) => return Err(self.reject("Meal", e)),
        };

        self.ui.set_status("Logging meal...");
        let ack = match self.gateway.log_meal(&entry).await {
            Ok(ack) => ack,
            Err(e) => return Err(self.reject("Meal", e)),
        };
        tracing::info!(
            meal = %entry.meal_name,
            estimated_calories = ?ack.estimated_calories,
            "Meal logged"
        );

        let journaled = self.record(JournalKind::Meal, session.as_ref(), &entry);
        self.ui.update(|s| {
            s.forms.meal.clear_after_submit();
            s.error = None;
            s.status = logged_status("Meal", session.as_ref());
        });

        let refreshed = self.aggregator.refresh().await.is_ok();
        Ok(WriteReceipt {
            ack,
            journaled,
            refreshed,
        })
    }

    /// Submit the goal form. Profile updates are not journaled.
    pub async fn submit_profile(&self) -> Result<WriteReceipt> {
        let form = self.ui.read(|s| s.forms.goal.clone());

        let update = match form.to_update() {
            Ok(update) => update,
            Err(e) => return Err(self.reject("Goal update", e)),
        };

        self.ui.set_status("Updating profile...");
        let ack = match self.gateway.update_profile(&update).await {
            Ok(ack) => ack,
            Err(e) => return Err(self.reject("Goal update", e)),
        };
        tracing::info!(goal = %update.goal, target = ?update.daily_calorie_target, "Profile updated");

        self.ui.update(|s| {
            s.error = None;
            s.status = "Profile updated".to_string();
        });

        let refreshed = self.aggregator.refresh().await.is_ok();
        Ok(WriteReceipt {
            ack,
            journaled: None,
            refreshed,
        })
    }

    /// Run the recipe search with the current filter form.
    ///
    /// Results replace the recipe list shown until the next refresh.
    pub async fn search_recipes(&self) -> Result<Vec<RecipeSuggestion>> {
        let filter = self.ui.read(|s| s.forms.recipe_filter.to_filter());

        let recipes = match self.gateway.list_recipes(&filter).await {
            Ok(recipes) => recipes,
            Err(e) => return Err(self.reject("Recipe lookup", e)),
        };
        tracing::debug!(?filter, count = recipes.len(), "Recipe search");

        let results = recipes.clone();
        self.ui.update(move |s| {
            s.status = format!("{} recipe(s) found", results.len());
            s.error = None;
            s.recipe_results = Some(results);
        });
        Ok(recipes)
    }

    /// Record a confirmed write. Journal failures are logged, not surfaced
    /// as write failures: the server already has the entry.
    fn record<T: serde::Serialize>(
        &self,
        kind: JournalKind,
        session: Option<&Session>,
        submitted: &T,
    ) -> Option<JournalEntry> {
        let session = session?;
        let provider: Provider = session.provider;

        let entry = match JournalEntry::new(kind, provider, local_timestamp(), submitted) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize journal entry");
                return None;
            }
        };

        match self.journal.append(&session.identity, entry.clone()) {
            Ok(()) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, identity = %session.identity, "Failed to append journal entry");
                None
            }
        }
    }

    /// Surface a failure verbatim and hand the error back to the caller.
    fn reject(&self, what: &str, error: AppError) -> AppError {
        let message = error.user_message();
        if error.is_validation() {
            tracing::debug!(what, error = %message, "Rejected locally");
        } else {
            tracing::warn!(what, error = %message, "Write failed");
        }
        self.ui.update(|s| {
            s.status = format!("{} error: {}", what, message);
            s.error = Some(message.clone());
        });
        error
    }
}

fn logged_status(what: &str, session: Option<&Session>) -> String {
    match session {
        Some(session) => format!("{} logged for {}", what, session.identity),
        None => format!("{} logged", what),
    }
}
