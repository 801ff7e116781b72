// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard snapshot and the aggregated workspace view.

use crate::models::{MealEntry, Profile, RecipeSuggestion, WorkoutEntry};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Response of `GET /api/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardSnapshot {
    /// Server-local date (ISO 8601, `YYYY-MM-DD`)
    pub date: String,
    pub profile: Profile,
    pub calories_today: f64,
    pub workout_streak: u32,
    pub motivation: String,
}

/// Whether today's intake is over the daily target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Above,
    Below,
}

impl TargetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TargetStatus::Above => "Above target",
            TargetStatus::Below => "Below target",
        }
    }
}

impl DashboardSnapshot {
    /// Calories eaten minus the daily target.
    pub fn calorie_delta(&self) -> f64 {
        self.calories_today - self.profile.daily_calorie_target as f64
    }

    /// Decided on the rounded delta so it always agrees with
    /// [`delta_display`](Self::delta_display). A displayed `0` is below.
    pub fn target_status(&self) -> TargetStatus {
        if self.rounded_delta() > 0 {
            TargetStatus::Above
        } else {
            TargetStatus::Below
        }
    }

    /// Rounded delta with an explicit `+` for surpluses, e.g. `+150`.
    pub fn delta_display(&self) -> String {
        format_signed(self.rounded_delta())
    }

    fn rounded_delta(&self) -> i64 {
        self.calorie_delta().round() as i64
    }
}

fn format_signed(value: i64) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Result of one successful aggregation cycle.
///
/// Produced whole by the aggregator and never patched afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub snapshot: DashboardSnapshot,
    pub workouts: Vec<WorkoutEntry>,
    pub meals: Vec<MealEntry>,
    pub plan: String,
    pub recipes: Vec<RecipeSuggestion>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkoutsResponse {
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MealsResponse {
    #[serde(default)]
    pub meals: Vec<MealEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlanResponse {
    #[serde(default)]
    pub plan: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipesResponse {
    #[serde(default)]
    pub recipes: Vec<RecipeSuggestion>,
}
