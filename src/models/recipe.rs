// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recipe suggestions and their query filter.

use crate::models::{Goal, MealName};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A recipe returned by `GET /api/recipes`. Read-only, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecipeSuggestion {
    pub name: String,
    pub meal_type: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl RecipeSuggestion {
    /// e.g. `520 kcal | P42 C55 F12`
    pub fn macros_line(&self) -> String {
        format!(
            "{} kcal | P{} C{} F{}",
            self.calories, self.protein_g, self.carbs_g, self.fat_g
        )
    }
}

/// Optional filters for the recipe query. Empty fields are not sent, so the
/// server falls back to the profile goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub goal: Option<Goal>,
    pub meal_type: Option<MealName>,
    pub max_calories: Option<u32>,
}

impl RecipeFilter {
    /// Query pairs in the order the server documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(goal) = self.goal {
            pairs.push(("goal", goal.to_string()));
        }
        if let Some(meal_type) = self.meal_type {
            pairs.push(("meal_type", meal_type.to_string()));
        }
        if let Some(max) = self.max_calories {
            pairs.push(("max_calories", max.to_string()));
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}
