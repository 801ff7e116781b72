// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! NOX API client.
//!
//! A stateless, typed boundary over the remote API:
//! - Every non-2xx response becomes [`AppError::Http`] carrying the body
//! - Transport failures become [`AppError::Network`]
//! - No retries and no timeouts beyond the transport default
//! - Outgoing bodies are always `application/json`

use crate::config::normalize_base_url;
use crate::error::AppError;
use crate::models::dashboard::{MealsResponse, PlanResponse, RecipesResponse, WorkoutsResponse};
use crate::models::{
    DashboardSnapshot, MealEntry, ProfileUpdate, RecipeFilter, RecipeSuggestion, WorkoutEntry,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Remote resource paths.
pub mod resources {
    pub const DASHBOARD: &str = "/api/dashboard";
    pub const WORKOUTS: &str = "/api/workouts";
    pub const MEALS: &str = "/api/meals";
    pub const ADAPTIVE_PLAN: &str = "/api/adaptive-plan";
    pub const RECIPES: &str = "/api/recipes";
    pub const PROFILE: &str = "/api/profile";
}

/// NOX API client.
#[derive(Clone)]
pub struct ApiGateway {
    http: reqwest::Client,
    base_url: String,
}

impl ApiGateway {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ─── Reads ───────────────────────────────────────────────────

    /// Profile, today's calories, streak and motivation.
    pub async fn get_dashboard(&self) -> Result<DashboardSnapshot, AppError> {
        self.get(resources::DASHBOARD, &[]).await
    }

    /// Workouts logged in the trailing `days`.
    pub async fn list_workouts(&self, days: u32) -> Result<Vec<WorkoutEntry>, AppError> {
        let response: WorkoutsResponse = self
            .get(resources::WORKOUTS, &[("days", days.to_string())])
            .await?;
        Ok(response.workouts)
    }

    pub async fn list_meals(&self) -> Result<Vec<MealEntry>, AppError> {
        let response: MealsResponse = self.get(resources::MEALS, &[]).await?;
        Ok(response.meals)
    }

    /// Generated training guidance text.
    pub async fn get_adaptive_plan(&self) -> Result<String, AppError> {
        let response: PlanResponse = self.get(resources::ADAPTIVE_PLAN, &[]).await?;
        Ok(response.plan)
    }

    /// Recipe suggestions; an empty filter returns the default list.
    pub async fn list_recipes(
        &self,
        filter: &RecipeFilter,
    ) -> Result<Vec<RecipeSuggestion>, AppError> {
        let response: RecipesResponse = self
            .get(resources::RECIPES, &filter.query_pairs())
            .await?;
        Ok(response.recipes)
    }

    // ─── Writes ──────────────────────────────────────────────────

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<WriteAck, AppError> {
        self.post(resources::PROFILE, update).await
    }

    pub async fn log_workout(&self, workout: &WorkoutEntry) -> Result<WriteAck, AppError> {
        self.post(resources::WORKOUTS, workout).await
    }

    pub async fn log_meal(&self, meal: &MealEntry) -> Result<WriteAck, AppError> {
        self.post(resources::MEALS, meal).await
    }

    // ─── Transport ───────────────────────────────────────────────

    fn url(&self, resource: &str) -> String {
        if resource.starts_with('/') {
            format!("{}{}", self.base_url, resource)
        } else {
            format!("{}/{}", self.base_url, resource)
        }
    }

    /// Generic GET request with JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        params: &[(&str, String)],
    ) -> Result<T, AppError> {
        tracing::debug!(resource, ?params, "GET");
        let response = self
            .http
            .get(self.url(resource))
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(resource, response).await
    }

    /// Generic POST request with a JSON body and JSON response.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        resource: &'static str,
        body: &B,
    ) -> Result<T, AppError> {
        tracing::debug!(resource, "POST");
        let response = self
            .http
            .post(self.url(resource))
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(resource, response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(resource, status = status.as_u16(), "Request rejected");
            return Err(AppError::http(status.as_u16(), body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| AppError::Decode {
            resource,
            message: e.to_string(),
        })
    }
}

/// Acknowledgement returned by write endpoints.
///
/// Only `ok` is guaranteed; the rest depends on the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WriteAck {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    /// Meal writes: server-side calorie estimate
    #[serde(default)]
    pub estimated_calories: Option<f64>,
    /// Workout writes: refreshed motivation line
    #[serde(default)]
    pub motivation: Option<String>,
}
