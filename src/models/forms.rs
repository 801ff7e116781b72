// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Editable form state.
//!
//! Forms hold raw text exactly as typed. Conversion into request bodies
//! applies the documented fallbacks for blank or non-numeric fields and then
//! runs local validation; nothing here touches the network.

use crate::error::{AppError, Result};
use crate::models::workout::DEFAULT_RPE;
use crate::models::{
    Goal, MealEntry, MealName, Profile, ProfileUpdate, RecipeFilter, Session, WorkoutEntry,
};
use std::str::FromStr;
use validator::Validate;

/// Workout form. Defaults mirror the browser client (3x8, 45 min, RPE 8).
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutForm {
    pub date: String,
    pub exercise: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
    pub duration_min: String,
    pub rpe: String,
    pub notes: String,
}

impl Default for WorkoutForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            exercise: String::new(),
            sets: "3".to_string(),
            reps: "8".to_string(),
            weight: String::new(),
            duration_min: "45".to_string(),
            rpe: "8".to_string(),
            notes: String::new(),
        }
    }
}

impl WorkoutForm {
    /// Build and validate the request body.
    ///
    /// Blank `date` means `today`. Blank or non-numeric counts fall back to
    /// 0 and a blank RPE to 7.0.
    pub fn to_entry(&self, today: &str, session: Option<&Session>) -> Result<WorkoutEntry> {
        let entry = WorkoutEntry {
            date: date_or_today(&self.date, today),
            exercise: self.exercise.trim().to_string(),
            sets: parse_or(&self.sets, 0),
            reps: parse_or(&self.reps, 0),
            weight: parse_finite_or(&self.weight, 0.0),
            duration_min: parse_or(&self.duration_min, 0),
            rpe: parse_finite_or(&self.rpe, DEFAULT_RPE),
            notes: self.notes.trim().to_string(),
            identity: session.map(|s| s.identity.clone()),
            provider: session.map(|s| s.provider.to_string()),
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Reset the fields that do not carry over to the next entry.
    pub fn clear_after_submit(&mut self) {
        self.exercise.clear();
        self.weight.clear();
        self.notes.clear();
    }
}

/// Meal form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealForm {
    pub date: String,
    pub meal_name: MealName,
    pub description: String,
}

impl MealForm {
    pub fn to_entry(&self, today: &str, session: Option<&Session>) -> Result<MealEntry> {
        let entry = MealEntry {
            date: date_or_today(&self.date, today),
            meal_name: self.meal_name.to_string(),
            description: self.description.trim().to_string(),
            estimated_calories: None,
            identity: session.map(|s| s.identity.clone()),
            provider: session.map(|s| s.provider.to_string()),
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn clear_after_submit(&mut self) {
        self.description.clear();
    }
}

/// Goal selector, seeded from the profile on every successful refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalForm {
    pub goal: Goal,
    pub daily_calorie_target: String,
}

impl GoalForm {
    pub fn seed_from(&mut self, profile: &Profile) {
        self.goal = profile.goal;
        self.daily_calorie_target = profile.daily_calorie_target.to_string();
    }

    /// Blank target is sent as `null`; anything else must be a whole number.
    pub fn to_update(&self) -> Result<ProfileUpdate> {
        let raw = self.daily_calorie_target.trim();
        let daily_calorie_target = if raw.is_empty() {
            None
        } else {
            Some(raw.parse::<i64>().map_err(|_| {
                AppError::Validation("daily calorie target must be a whole number".to_string())
            })?)
        };
        let update = ProfileUpdate {
            goal: self.goal,
            daily_calorie_target,
        };
        update.validate()?;
        Ok(update)
    }
}

/// Recipe search filter as typed. Unparseable fields are treated as unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilterForm {
    pub goal: String,
    pub meal_type: String,
    pub max_calories: String,
}

impl RecipeFilterForm {
    pub fn to_filter(&self) -> RecipeFilter {
        RecipeFilter {
            goal: self.goal.parse().ok(),
            meal_type: self.meal_type.parse().ok(),
            max_calories: self.max_calories.trim().parse().ok(),
        }
    }
}

/// All editable forms of the workspace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub goal: GoalForm,
    pub workout: WorkoutForm,
    pub meal: MealForm,
    pub recipe_filter: RecipeFilterForm,
}

/// Addressable form fields, named as the terminal front-end spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Goal,
    CalorieTarget,
    WorkoutDate,
    Exercise,
    Sets,
    Reps,
    Weight,
    Duration,
    Rpe,
    Notes,
    MealDate,
    MealName,
    Description,
    RecipeGoal,
    RecipeMealType,
    RecipeMaxCalories,
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let field = match s.trim().to_lowercase().as_str() {
            "goal" => FormField::Goal,
            "target" | "daily_calorie_target" => FormField::CalorieTarget,
            "date" | "workout.date" => FormField::WorkoutDate,
            "exercise" => FormField::Exercise,
            "sets" => FormField::Sets,
            "reps" => FormField::Reps,
            "weight" => FormField::Weight,
            "duration" | "duration_min" => FormField::Duration,
            "rpe" => FormField::Rpe,
            "notes" => FormField::Notes,
            "meal.date" => FormField::MealDate,
            "meal" | "meal_name" => FormField::MealName,
            "description" | "foods" => FormField::Description,
            "recipe.goal" => FormField::RecipeGoal,
            "recipe.meal_type" => FormField::RecipeMealType,
            "recipe.max_calories" => FormField::RecipeMaxCalories,
            other => return Err(format!("unknown field '{}'", other)),
        };
        Ok(field)
    }
}

impl FormState {
    /// Set one field from raw text.
    ///
    /// Free-text fields accept anything. The two selector fields (goal and
    /// meal name) only accept their listed options.
    pub fn set(&mut self, field: FormField, value: &str) -> Result<()> {
        match field {
            FormField::Goal => self.goal.goal = value.parse().map_err(AppError::Validation)?,
            FormField::CalorieTarget => self.goal.daily_calorie_target = value.to_string(),
            FormField::WorkoutDate => self.workout.date = value.to_string(),
            FormField::Exercise => self.workout.exercise = value.to_string(),
            FormField::Sets => self.workout.sets = value.to_string(),
            FormField::Reps => self.workout.reps = value.to_string(),
            FormField::Weight => self.workout.weight = value.to_string(),
            FormField::Duration => self.workout.duration_min = value.to_string(),
            FormField::Rpe => self.workout.rpe = value.to_string(),
            FormField::Notes => self.workout.notes = value.to_string(),
            FormField::MealDate => self.meal.date = value.to_string(),
            FormField::MealName => {
                self.meal.meal_name = value.parse().map_err(AppError::Validation)?
            }
            FormField::Description => self.meal.description = value.to_string(),
            FormField::RecipeGoal => self.recipe_filter.goal = value.to_string(),
            FormField::RecipeMealType => self.recipe_filter.meal_type = value.to_string(),
            FormField::RecipeMaxCalories => self.recipe_filter.max_calories = value.to_string(),
        }
        Ok(())
    }
}

fn date_or_today(raw: &str, today: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        today.to_string()
    } else {
        trimmed.to_string()
    }
}

fn parse_or<T: FromStr>(raw: &str, fallback: T) -> T {
    raw.trim().parse().unwrap_or(fallback)
}

fn parse_finite_or(raw: &str, fallback: f64) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}
