// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process fake of the NOX API.
//!
//! Every route counts hits, can be told to fail, can be delayed per call and
//! records what it was sent. Response data is captured when the request
//! arrives, before any injected delay, so a delayed call returns the data
//! as it was when it was issued.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dashmap::DashMap;
use nox_client::config::Config;
use nox_client::flow::FlowController;
use nox_client::store::{KeyValueStore, MemoryStore};
use nox_client::AppState;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const GET_DASHBOARD: &str = "GET /api/dashboard";
pub const GET_WORKOUTS: &str = "GET /api/workouts";
pub const GET_MEALS: &str = "GET /api/meals";
pub const GET_PLAN: &str = "GET /api/adaptive-plan";
pub const GET_RECIPES: &str = "GET /api/recipes";
pub const POST_PROFILE: &str = "POST /api/profile";
pub const POST_WORKOUTS: &str = "POST /api/workouts";
pub const POST_MEALS: &str = "POST /api/meals";

/// Calories the fake assigns to every logged meal.
pub const MEAL_ESTIMATE: f64 = 600.0;

/// Server-side data the fake serves.
#[derive(Debug, Clone)]
pub struct FakeData {
    pub name: String,
    pub goal: String,
    pub daily_calorie_target: i64,
    pub calories_today: f64,
    pub workout_streak: u32,
    pub motivation: String,
    pub workouts: Vec<Value>,
    pub meals: Vec<Value>,
    pub plan: String,
    pub recipes: Vec<Value>,
}

impl Default for FakeData {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            goal: "maintenance".to_string(),
            daily_calorie_target: 2200,
            calories_today: 0.0,
            workout_streak: 0,
            motivation: "Start today".to_string(),
            workouts: Vec::new(),
            meals: Vec::new(),
            plan: "Base week: 3 full-body sessions".to_string(),
            recipes: vec![
                recipe("Overnight oats", "breakfast", 380.0),
                recipe("Chicken rice bowl", "lunch", 640.0),
            ],
        }
    }
}

#[allow(dead_code)]
pub fn recipe(name: &str, meal_type: &str, calories: f64) -> Value {
    json!({
        "name": name,
        "meal_type": meal_type,
        "calories": calories,
        "protein_g": 30.0,
        "carbs_g": 50.0,
        "fat_g": 12.0,
        "ingredients": ["a", "b"],
    })
}

#[derive(Default)]
pub struct FakeApi {
    pub data: Mutex<FakeData>,
    hits: DashMap<&'static str, usize>,
    failures: DashMap<&'static str, (u16, String)>,
    delays: DashMap<&'static str, VecDeque<Duration>>,
    posts: Mutex<Vec<(&'static str, Value)>>,
    queries: Mutex<Vec<(&'static str, HashMap<String, String>)>>,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn hits(&self, route: &'static str) -> usize {
        self.hits.get(route).map(|n| *n).unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.hits.iter().map(|e| *e.value()).sum()
    }

    /// Make every call to `route` fail with `status` and `body`.
    pub fn fail(&self, route: &'static str, status: u16, body: &str) {
        self.failures.insert(route, (status, body.to_string()));
    }

    pub fn heal(&self, route: &'static str) {
        self.failures.remove(route);
    }

    /// Delay the next call to `route` by `delay`. Queued per call.
    pub fn delay_next(&self, route: &'static str, delay: Duration) {
        self.delays.entry(route).or_default().push_back(delay);
    }

    pub fn posts(&self, route: &'static str) -> Vec<Value> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| *r == route)
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn queries(&self, route: &'static str) -> Vec<HashMap<String, String>> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| *r == route)
            .map(|(_, q)| q.clone())
            .collect()
    }

    pub fn with_data(&self, f: impl FnOnce(&mut FakeData)) {
        f(&mut self.data.lock().unwrap());
    }

    async fn respond(&self, route: &'static str, body: Value) -> Response {
        *self.hits.entry(route).or_default() += 1;

        let delay = self.delays.get_mut(route).and_then(|mut q| q.pop_front());
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(failure) = self.failures.get(route).map(|f| f.value().clone()) {
            let status = StatusCode::from_u16(failure.0).unwrap();
            return (status, failure.1).into_response();
        }
        Json(body).into_response()
    }
}

type Api = State<Arc<FakeApi>>;

async fn dashboard(State(api): Api) -> Response {
    let body = {
        let d = api.data.lock().unwrap();
        json!({
            "date": "2026-03-02",
            "profile": {
                "name": d.name,
                "goal": d.goal,
                "daily_calorie_target": d.daily_calorie_target,
            },
            "calories_today": d.calories_today,
            "workout_streak": d.workout_streak,
            "motivation": d.motivation,
        })
    };
    api.respond(GET_DASHBOARD, body).await
}

async fn list_workouts(State(api): Api, Query(q): Query<HashMap<String, String>>) -> Response {
    api.queries.lock().unwrap().push((GET_WORKOUTS, q));
    let body = json!({ "workouts": api.data.lock().unwrap().workouts });
    api.respond(GET_WORKOUTS, body).await
}

async fn log_workout(State(api): Api, Json(workout): Json<Value>) -> Response {
    let failing = api.failures.contains_key(POST_WORKOUTS);
    api.posts.lock().unwrap().push((POST_WORKOUTS, workout.clone()));
    if !failing {
        let mut d = api.data.lock().unwrap();
        d.workouts.push(workout);
        d.workout_streak += 1;
    }
    api.respond(POST_WORKOUTS, json!({ "ok": true, "motivation": "Nice work" }))
        .await
}

async fn list_meals(State(api): Api) -> Response {
    let body = json!({ "meals": api.data.lock().unwrap().meals });
    api.respond(GET_MEALS, body).await
}

async fn log_meal(State(api): Api, Json(mut meal): Json<Value>) -> Response {
    let failing = api.failures.contains_key(POST_MEALS);
    api.posts.lock().unwrap().push((POST_MEALS, meal.clone()));
    if !failing {
        meal["estimated_calories"] = json!(MEAL_ESTIMATE);
        let mut d = api.data.lock().unwrap();
        d.meals.push(meal);
        d.calories_today += MEAL_ESTIMATE;
    }
    api.respond(
        POST_MEALS,
        json!({ "ok": true, "estimated_calories": MEAL_ESTIMATE }),
    )
    .await
}

async fn adaptive_plan(State(api): Api) -> Response {
    let body = json!({ "plan": api.data.lock().unwrap().plan });
    api.respond(GET_PLAN, body).await
}

async fn list_recipes(State(api): Api, Query(q): Query<HashMap<String, String>>) -> Response {
    let max_calories: Option<f64> = q.get("max_calories").and_then(|v| v.parse().ok());
    let recipes: Vec<Value> = api
        .data
        .lock()
        .unwrap()
        .recipes
        .iter()
        .filter(|r| match max_calories {
            Some(max) => r["calories"].as_f64().unwrap_or(0.0) <= max,
            None => true,
        })
        .cloned()
        .collect();
    api.queries.lock().unwrap().push((GET_RECIPES, q));
    api.respond(GET_RECIPES, json!({ "recipes": recipes })).await
}

async fn update_profile(State(api): Api, Json(update): Json<Value>) -> Response {
    let failing = api.failures.contains_key(POST_PROFILE);
    api.posts.lock().unwrap().push((POST_PROFILE, update.clone()));
    if !failing {
        let mut d = api.data.lock().unwrap();
        if let Some(goal) = update["goal"].as_str() {
            d.goal = goal.to_string();
        }
        if let Some(target) = update["daily_calorie_target"].as_i64() {
            d.daily_calorie_target = target;
        }
    }
    api.respond(POST_PROFILE, json!({ "ok": true })).await
}

pub struct FakeServer {
    pub base_url: String,
    pub api: Arc<FakeApi>,
}

/// Start the fake API on an ephemeral port.
pub async fn spawn_fake_api() -> FakeServer {
    let api = Arc::new(FakeApi::default());
    let router = Router::new()
        .route("/api/dashboard", get(dashboard))
        .route("/api/workouts", get(list_workouts).post(log_workout))
        .route("/api/meals", get(list_meals).post(log_meal))
        .route("/api/adaptive-plan", get(adaptive_plan))
        .route("/api/recipes", get(list_recipes))
        .route("/api/profile", axum::routing::post(update_profile))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake API");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Fake API crashed");
    });

    FakeServer {
        base_url: format!("http://{}", addr),
        api,
    }
}

/// A base URL nothing listens on.
#[allow(dead_code)]
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}", addr)
}

/// Create a flow over the given API and storage backend.
#[allow(dead_code)]
pub fn test_flow(base_url: &str, backend: Arc<dyn KeyValueStore>) -> FlowController {
    let config = Config {
        api_base_url: base_url.to_string(),
        ..Config::default()
    };
    FlowController::new(Arc::new(AppState::new(config, backend)))
}

/// Create a flow already signed in as `identity` (guest).
#[allow(dead_code)]
pub async fn signed_in_flow(base_url: &str, identity: &str) -> FlowController {
    let flow = test_flow(base_url, Arc::new(MemoryStore::new()));
    flow.start().await;
    flow.complete_auth(identity)
        .await
        .expect("Failed to sign in");
    flow
}
