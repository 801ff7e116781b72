// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard aggregation.
//!
//! One refresh issues five reads concurrently and waits for all of them:
//! 1. Dashboard summary (profile, calories, streak, motivation)
//! 2. Workouts in the trailing window
//! 3. Meal history
//! 4. Adaptive plan text
//! 5. Default recipe list
//!
//! If any read fails the refresh fails and the visible view is untouched.
//! A successful refresh replaces the view in one state update. Concurrent
//! refreshes are not ordered: whichever completes last stays visible.
//! A refresh that completes after a sign-in or sign-out is discarded.

use crate::error::AppError;
use crate::models::{DashboardView, RecipeFilter};
use crate::services::ApiGateway;
use crate::state::UiStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardAggregator {
    gateway: ApiGateway,
    ui: UiStore,
    workout_window_days: u32,
}

impl DashboardAggregator {
    pub fn new(gateway: ApiGateway, ui: UiStore, workout_window_days: u32) -> Self {
        Self {
            gateway,
            ui,
            workout_window_days,
        }
    }

    /// Fetch everything and publish it as the new visible view.
    ///
    /// On failure the error banner is set and the previous view stays.
    /// If the session changed while the reads were running, the result is
    /// returned to the caller but never shown.
    pub async fn refresh(&self) -> Result<Arc<DashboardView>, AppError> {
        let mut epoch = 0;
        self.ui.update(|s| {
            s.in_flight += 1;
            s.status = "Syncing dashboard...".to_string();
            epoch = s.session_epoch;
        });

        let result = self.fetch_all().await;

        match result {
            Ok(view) => {
                let view = Arc::new(view);
                let published = view.clone();
                let mut stale = false;
                self.ui.update(|s| {
                    s.in_flight = s.in_flight.saturating_sub(1);
                    if s.session_epoch != epoch {
                        stale = true;
                        return;
                    }
                    s.forms.goal.seed_from(&published.snapshot.profile);
                    s.view = Some(published);
                    s.recipe_results = None;
                    s.error = None;
                    s.status = match &s.session {
                        Some(session) => format!("Dashboard synced | user: {}", session.identity),
                        None => "Dashboard synced".to_string(),
                    };
                });
                if stale {
                    tracing::debug!("Session changed during refresh, result discarded");
                    return Ok(view);
                }
                tracing::info!(
                    workouts = view.workouts.len(),
                    meals = view.meals.len(),
                    recipes = view.recipes.len(),
                    "Dashboard refreshed"
                );
                Ok(view)
            }
            Err(e) => {
                let message = e.user_message();
                self.ui.update(|s| {
                    s.in_flight = s.in_flight.saturating_sub(1);
                    if s.session_epoch != epoch {
                        return;
                    }
                    s.status = format!("Dashboard error: {}", message);
                    s.error = Some(message.clone());
                });
                tracing::warn!(error = %e, "Dashboard refresh failed, keeping previous view");
                Err(e)
            }
        }
    }

    /// The five reads, joined. The first failure aborts the rest.
    async fn fetch_all(&self) -> Result<DashboardView, AppError> {
        let default_recipes = RecipeFilter::default();
        let (snapshot, workouts, meals, plan, recipes) = tokio::try_join!(
            tagged("dashboard", self.gateway.get_dashboard()),
            tagged(
                "workouts",
                self.gateway.list_workouts(self.workout_window_days)
            ),
            tagged("meals", self.gateway.list_meals()),
            tagged("adaptive plan", self.gateway.get_adaptive_plan()),
            tagged("recipes", self.gateway.list_recipes(&default_recipes)),
        )?;

        Ok(DashboardView {
            snapshot,
            workouts,
            meals,
            plan,
            recipes,
        })
    }
}

/// Attach the resource name to a failed read.
async fn tagged<T>(
    resource: &'static str,
    read: impl std::future::Future<Output = Result<T, AppError>>,
) -> Result<T, AppError> {
    read.await.map_err(|e| AppError::aggregation(resource, e))
}
