// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Single-column layout modeled on the mobile client.

use super::{provider_picker, scrolled, Presenter};
use crate::render::{Panel, Screen, WorkspaceScreen};

pub struct CompactPresenter;

impl Presenter for CompactPresenter {
    fn present(&self, screen: &Screen) -> String {
        match screen {
            Screen::Loading { .. } => "NOX ...\n".to_string(),
            Screen::AuthGate {
                selected, status, ..
            } => format!("NOX login {}\n{}\n", provider_picker(*selected), status),
            Screen::Workspace(workspace) => present_workspace(workspace),
        }
    }
}

fn present_workspace(screen: &WorkspaceScreen) -> String {
    let mut out = format!("{} > {}\n", screen.badge, screen.active);
    if let Some(banner) = &screen.banner {
        out.push_str(&format!("! {}\n", banner));
    }
    for line in scrolled(body(&screen.panel), screen.scroll_offset) {
        out.push_str(&line);
        out.push('\n');
    }
    if screen.syncing {
        out.push_str("...\n");
    } else {
        out.push_str(&format!("{}\n", screen.status));
    }
    out
}

fn body(panel: &Panel) -> Vec<String> {
    match panel {
        Panel::Dashboard(None) => vec!["--".to_string()],
        Panel::Dashboard(Some(d)) => vec![
            format!(
                "{} kcal ({}) {}",
                d.calories_today,
                d.delta,
                d.target_status.label()
            ),
            format!("streak {} | {}", d.workout_streak, d.goal),
            d.motivation.clone(),
        ],
        Panel::Workout { form, history } => {
            let mut lines = vec![format!(
                "+ {} {}x{} {}",
                form.exercise, form.sets, form.reps, form.weight
            )];
            lines.extend(history.iter().cloned());
            lines
        }
        Panel::Meal { form, history } => {
            let mut lines = vec![format!("+ {}: {}", form.meal_name, form.description)];
            lines.extend(history.iter().cloned());
            lines
        }
        Panel::Plan { plan } => vec![plan.clone().unwrap_or_else(|| "--".to_string())],
        Panel::Recipes { recipes, .. } => recipes
            .iter()
            .map(|r| format!("{} | {}", r.name, r.macros_line()))
            .collect(),
    }
}
