// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the client.

pub mod dashboard;
pub mod forms;
pub mod journal;
pub mod meal;
pub mod profile;
pub mod recipe;
pub mod session;
pub mod workout;

pub use dashboard::{DashboardSnapshot, DashboardView, TargetStatus};
pub use forms::{FormField, FormState, GoalForm, MealForm, RecipeFilterForm, WorkoutForm};
pub use journal::{JournalEntry, JournalKind};
pub use meal::{MealEntry, MealName};
pub use profile::{Goal, Profile, ProfileUpdate};
pub use recipe::{RecipeFilter, RecipeSuggestion};
pub use session::{Provider, Session};
pub use workout::WorkoutEntry;
