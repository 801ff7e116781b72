// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile as served by `/api/dashboard` and updated via `/api/profile`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Training goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Goal {
    FatLoss,
    #[default]
    Maintenance,
    MuscleGain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::FatLoss, Goal::Maintenance, Goal::MuscleGain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::FatLoss => "fat_loss",
            Goal::Maintenance => "maintenance",
            Goal::MuscleGain => "muscle_gain",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goal::ALL
            .into_iter()
            .find(|g| g.as_str() == s.trim())
            .ok_or_else(|| format!("unknown goal '{}'", s.trim()))
    }
}

/// Profile embedded in every dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Profile {
    pub name: String,
    pub goal: Goal,
    pub daily_calorie_target: i64,
}

/// Body of `POST /api/profile`.
///
/// A `None` target is sent as `null` and leaves the server value unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    pub goal: Goal,
    #[validate(range(min = 1, message = "daily calorie target must be positive"))]
    pub daily_calorie_target: Option<i64>,
}
