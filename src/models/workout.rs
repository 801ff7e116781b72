// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout log entries.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// A logged training session.
///
/// The same shape is posted to `/api/workouts` (with identity and provider
/// filled in) and read back from it (where they are usually absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutEntry {
    /// ISO 8601 date (`YYYY-MM-DD`)
    pub date: String,
    #[validate(length(min = 1, message = "exercise is required"))]
    pub exercise: String,
    #[serde(default)]
    pub sets: u32,
    #[serde(default)]
    pub reps: u32,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub duration_min: u32,
    #[serde(default = "default_rpe")]
    pub rpe: f64,
    #[serde(default)]
    pub notes: String,
    /// User-entered name; sent as `user_name` on the wire
    #[serde(
        default,
        rename = "user_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub identity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// RPE assumed when none is given.
pub const DEFAULT_RPE: f64 = 7.0;

fn default_rpe() -> f64 {
    DEFAULT_RPE
}

impl WorkoutEntry {
    /// One-line history row, e.g. `2026-03-02 | Squat | 3x8 @ 100 | 45 min | RPE 8`.
    pub fn summary_line(&self) -> String {
        format!(
            "{} | {} | {}x{} @ {} | {} min | RPE {}",
            self.date, self.exercise, self.sets, self.reps, self.weight, self.duration_min, self.rpe
        )
    }
}
