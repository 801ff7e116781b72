// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Card layout modeled on the browser client: a navigation bar with every
//! module, KPI cards on the dashboard, forms shown next to their history.

use super::{provider_picker, scrolled, Presenter};
use crate::render::{DashboardPanel, Panel, Screen, WorkspaceScreen};
use crate::state::Module;

pub struct PanelPresenter;

impl Presenter for PanelPresenter {
    fn present(&self, screen: &Screen) -> String {
        match screen {
            Screen::Loading { status } => format!("NOX\n{}\n", status),
            Screen::AuthGate {
                selected,
                status,
                error,
            } => {
                let mut out = String::from("== NOX | Sign in ==\n");
                out.push_str(&format!("Provider: {}\n", provider_picker(*selected)));
                if let Some(error) = error {
                    out.push_str(&format!("! {}\n", error));
                }
                out.push_str(&format!("{}\n", status));
                out
            }
            Screen::Workspace(workspace) => present_workspace(workspace),
        }
    }
}

fn present_workspace(screen: &WorkspaceScreen) -> String {
    let nav = Module::ALL
        .iter()
        .map(|m| {
            if *m == screen.active {
                format!("[{}]", m)
            } else {
                m.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let mut out = format!("== NOX == {} ==\n{}\n", screen.badge, nav);
    if let Some(banner) = &screen.banner {
        out.push_str(&format!("!! {}\n", banner));
    }
    for line in scrolled(panel_lines(&screen.panel), screen.scroll_offset) {
        out.push_str(&line);
        out.push('\n');
    }
    let sync = if screen.syncing { " (syncing)" } else { "" };
    out.push_str(&format!("-- {}{}\n", screen.status, sync));
    out
}

fn panel_lines(panel: &Panel) -> Vec<String> {
    match panel {
        Panel::Dashboard(None) => vec!["No dashboard data yet. Try `refresh`.".to_string()],
        Panel::Dashboard(Some(dashboard)) => dashboard_cards(dashboard),
        Panel::Workout { form, history } => {
            let mut lines = vec![
                "Log workout".to_string(),
                format!("  date: {}", or_today(&form.date)),
                format!("  exercise: {}", form.exercise),
                format!(
                    "  sets: {}  reps: {}  weight: {}",
                    form.sets, form.reps, form.weight
                ),
                format!("  duration: {} min  rpe: {}", form.duration_min, form.rpe),
                format!("  notes: {}", form.notes),
                "Recent workouts".to_string(),
            ];
            lines.extend(history_or_empty(history, "No workouts logged."));
            lines
        }
        Panel::Meal { form, history } => {
            let mut lines = vec![
                "Log meal".to_string(),
                format!("  date: {}", or_today(&form.date)),
                format!("  meal: {}", form.meal_name),
                format!("  description: {}", form.description),
                "Recent meals".to_string(),
            ];
            lines.extend(history_or_empty(history, "No meals logged."));
            lines
        }
        Panel::Plan { plan } => {
            let mut lines = vec!["Adaptive plan".to_string()];
            match plan {
                Some(plan) => lines.extend(plan.lines().map(|l| format!("  {}", l))),
                None => lines.push("  Not loaded yet.".to_string()),
            }
            lines
        }
        Panel::Recipes {
            filter,
            searched,
            recipes,
        } => {
            let title = if *searched { "Search results" } else { "Suggested recipes" };
            let mut lines = vec![
                format!(
                    "Filter  goal: {}  meal_type: {}  max_calories: {}",
                    or_any(&filter.goal),
                    or_any(&filter.meal_type),
                    or_any(&filter.max_calories)
                ),
                title.to_string(),
            ];
            if recipes.is_empty() {
                lines.push("  No recipes found.".to_string());
            }
            for recipe in recipes {
                lines.push(format!("  {} ({})", recipe.name, recipe.meal_type));
                lines.push(format!("    {}", recipe.macros_line()));
                lines.push(format!("    {}", recipe.ingredients.join(", ")));
            }
            lines
        }
    }
}

fn dashboard_cards(d: &DashboardPanel) -> Vec<String> {
    vec![
        format!("Today {} | {}", d.date, d.name),
        format!(
            "[ Calories {} / {} ]  [ {} {} ]",
            d.calories_today,
            d.daily_calorie_target,
            d.delta,
            d.target_status.label()
        ),
        format!("[ Streak {} day(s) ]  [ Goal {} ]", d.workout_streak, d.goal),
        format!("\"{}\"", d.motivation),
        format!(
            "Goal form  goal: {}  target: {}",
            d.goal_form.goal, d.goal_form.daily_calorie_target
        ),
    ]
}

fn history_or_empty(history: &[String], empty: &str) -> Vec<String> {
    if history.is_empty() {
        vec![format!("  {}", empty)]
    } else {
        history.iter().map(|l| format!("  {}", l)).collect()
    }
}

fn or_today(date: &str) -> &str {
    if date.trim().is_empty() {
        "(today)"
    } else {
        date
    }
}

fn or_any(value: &str) -> &str {
    if value.trim().is_empty() {
        "any"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, GoalForm, TargetStatus, WorkoutForm};

    fn workspace(panel: Panel) -> Screen {
        Screen::Workspace(WorkspaceScreen {
            badge: "GUEST | Alex".to_string(),
            active: Module::Dashboard,
            banner: None,
            status: "Dashboard synced | user: Alex".to_string(),
            syncing: false,
            scroll_offset: 0,
            panel,
        })
    }

    #[test]
    fn test_dashboard_cards() {
        let screen = workspace(Panel::Dashboard(Some(DashboardPanel {
            date: "2026-03-02".to_string(),
            name: "User".to_string(),
            goal: Goal::FatLoss,
            daily_calorie_target: 2000,
            calories_today: 2150,
            delta: "+150".to_string(),
            target_status: TargetStatus::Above,
            workout_streak: 3,
            motivation: "Keep going".to_string(),
            goal_form: GoalForm::default(),
        })));
        let text = PanelPresenter.present(&screen);
        assert!(text.contains("[dashboard] | workout"));
        assert!(text.contains("[ +150 Above target ]"));
        assert!(text.ends_with("-- Dashboard synced | user: Alex\n"));
    }

    #[test]
    fn test_banner_and_scroll() {
        let mut screen = workspace(Panel::Workout {
            form: WorkoutForm::default(),
            history: Vec::new(),
        });
        if let Screen::Workspace(ws) = &mut screen {
            ws.banner = Some("boom".to_string());
            ws.scroll_offset = 1;
        }
        let text = PanelPresenter.present(&screen);
        assert!(text.contains("!! boom\n"));
        assert!(!text.contains("Log workout"));
        assert!(text.contains("date: (today)"));
    }
}
