// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure rendering of [`UiState`] into a presenter-neutral [`Screen`].
//!
//! Everything both front-ends show is decided here: history ordering and
//! limits, the signed calorie delta, which recipe list is visible. The
//! presenters only lay the result out.

use crate::models::{
    Goal, GoalForm, MealEntry, MealForm, Provider, RecipeFilterForm, RecipeSuggestion,
    TargetStatus, WorkoutEntry, WorkoutForm,
};
use crate::state::{FlowState, Module, UiState};

/// Workouts shown in the workout module.
pub const WORKOUT_HISTORY_LIMIT: usize = 12;
/// Meals shown in the meal module.
pub const MEAL_HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading {
        status: String,
    },
    AuthGate {
        selected: Provider,
        status: String,
        error: Option<String>,
    },
    Workspace(WorkspaceScreen),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceScreen {
    /// e.g. `GUEST | Alex`
    pub badge: String,
    pub active: Module,
    pub banner: Option<String>,
    pub status: String,
    pub syncing: bool,
    pub scroll_offset: u32,
    pub panel: Panel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    /// `None` until the first successful refresh
    Dashboard(Option<DashboardPanel>),
    Workout {
        form: WorkoutForm,
        history: Vec<String>,
    },
    Meal {
        form: MealForm,
        history: Vec<String>,
    },
    Plan {
        plan: Option<String>,
    },
    Recipes {
        filter: RecipeFilterForm,
        searched: bool,
        recipes: Vec<RecipeSuggestion>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPanel {
    pub date: String,
    pub name: String,
    pub goal: Goal,
    pub daily_calorie_target: i64,
    pub calories_today: i64,
    pub delta: String,
    pub target_status: TargetStatus,
    pub workout_streak: u32,
    pub motivation: String,
    pub goal_form: GoalForm,
}

pub fn render(state: &UiState) -> Screen {
    match state.flow {
        FlowState::Loading => Screen::Loading {
            status: state.status.clone(),
        },
        FlowState::AuthGate => Screen::AuthGate {
            selected: state.selected_provider,
            status: state.status.clone(),
            error: state.error.clone(),
        },
        FlowState::Workspace { active } => Screen::Workspace(WorkspaceScreen {
            badge: state
                .session
                .as_ref()
                .map(|s| s.badge())
                .unwrap_or_default(),
            active,
            banner: state.error.clone(),
            status: state.status.clone(),
            syncing: state.is_syncing(),
            scroll_offset: state.scroll_offset,
            panel: render_panel(active, state),
        }),
    }
}

fn render_panel(active: Module, state: &UiState) -> Panel {
    let view = state.view.as_deref();
    match active {
        Module::Dashboard => Panel::Dashboard(view.map(|view| {
            let snapshot = &view.snapshot;
            DashboardPanel {
                date: snapshot.date.clone(),
                name: snapshot.profile.name.clone(),
                goal: snapshot.profile.goal,
                daily_calorie_target: snapshot.profile.daily_calorie_target,
                calories_today: snapshot.calories_today.round() as i64,
                delta: snapshot.delta_display(),
                target_status: snapshot.target_status(),
                workout_streak: snapshot.workout_streak,
                motivation: snapshot.motivation.clone(),
                goal_form: state.forms.goal.clone(),
            }
        })),
        Module::Workout => Panel::Workout {
            form: state.forms.workout.clone(),
            history: view
                .map(|v| workout_history(&v.workouts))
                .unwrap_or_default(),
        },
        Module::Meal => Panel::Meal {
            form: state.forms.meal.clone(),
            history: view.map(|v| meal_history(&v.meals)).unwrap_or_default(),
        },
        Module::Plan => Panel::Plan {
            plan: view.map(|v| v.plan.clone()),
        },
        Module::Recipes => Panel::Recipes {
            filter: state.forms.recipe_filter.clone(),
            searched: state.recipe_results.is_some(),
            recipes: state.recipes().to_vec(),
        },
    }
}

/// Newest first, at most [`WORKOUT_HISTORY_LIMIT`] lines.
pub fn workout_history(workouts: &[WorkoutEntry]) -> Vec<String> {
    let mut sorted: Vec<&WorkoutEntry> = workouts.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
        .into_iter()
        .take(WORKOUT_HISTORY_LIMIT)
        .map(WorkoutEntry::summary_line)
        .collect()
}

/// Newest first, at most [`MEAL_HISTORY_LIMIT`] lines.
pub fn meal_history(meals: &[MealEntry]) -> Vec<String> {
    let mut sorted: Vec<&MealEntry> = meals.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
        .into_iter()
        .take(MEAL_HISTORY_LIMIT)
        .map(MealEntry::summary_line)
        .collect()
}
