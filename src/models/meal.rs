// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal log entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum MealName {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
    Snack,
}

impl MealName {
    pub const ALL: [MealName; 4] = [
        MealName::Breakfast,
        MealName::Lunch,
        MealName::Dinner,
        MealName::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealName::Breakfast => "breakfast",
            MealName::Lunch => "lunch",
            MealName::Dinner => "dinner",
            MealName::Snack => "snack",
        }
    }
}

impl fmt::Display for MealName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MealName::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| format!("unknown meal '{}'", s.trim()))
    }
}

/// A logged meal. Calories are estimated by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MealEntry {
    pub date: String,
    /// Free text on the server side; the form only ever sends a [`MealName`]
    pub meal_name: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    /// Server-assigned; never sent by the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_calories: Option<f64>,
    #[serde(
        default,
        rename = "user_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub identity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl MealEntry {
    /// History row, e.g. `2026-03-02 | lunch | 612 kcal`.
    pub fn summary_line(&self) -> String {
        format!(
            "{} | {} | {} kcal",
            self.date,
            self.meal_name,
            self.estimated_calories.unwrap_or(0.0).round() as i64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_name_parse_is_case_insensitive() {
        assert_eq!("Dinner".parse::<MealName>(), Ok(MealName::Dinner));
        assert!("brunch".parse::<MealName>().is_err());
    }

    #[test]
    fn test_outgoing_meal_omits_server_fields() {
        let meal = MealEntry {
            date: "2026-03-02".to_string(),
            meal_name: MealName::Lunch.to_string(),
            description: "150g chicken, 180g rice".to_string(),
            estimated_calories: None,
            identity: Some("Alex".to_string()),
            provider: Some("guest".to_string()),
        };
        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["meal_name"], "lunch");
        assert!(json.get("estimated_calories").is_none());
    }

    #[test]
    fn test_summary_line_rounds_calories() {
        let meal: MealEntry = serde_json::from_str(
            r#"{"date":"2026-03-02","meal_name":"snack","description":"1 banana","estimated_calories":104.6}"#,
        )
        .unwrap();
        assert_eq!(meal.summary_line(), "2026-03-02 | snack | 105 kcal");
    }

    #[test]
    fn test_history_row_keeps_free_text_meal_name() {
        let meal: MealEntry = serde_json::from_str(
            r#"{"date":"2026-03-02","meal_name":"Brunch","description":"eggs"}"#,
        )
        .unwrap();
        assert_eq!(meal.meal_name, "Brunch");
        assert_eq!(meal.summary_line(), "2026-03-02 | Brunch | 0 kcal");
    }
}
