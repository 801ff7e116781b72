// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! NOX client: sync and local session layer for the NOX fitness service
//!
//! This crate aggregates the NOX API into one dashboard view, submits
//! workout and meal writes, keeps a local journal of confirmed writes, and
//! drives the loading / auth gate / workspace flow shared by both
//! front-ends.

pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod frontend;
pub mod models;
pub mod render;
pub mod services;
pub mod state;
pub mod store;
pub mod time_utils;

use config::Config;
use services::{ApiGateway, DashboardAggregator, WriteCoordinator};
use state::UiStore;
use std::sync::Arc;
use store::{JournalStore, KeyValueStore, KvJournal, KvSessionStore, SessionStore};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub ui: UiStore,
    pub gateway: ApiGateway,
    pub aggregator: DashboardAggregator,
    pub coordinator: WriteCoordinator,
    pub sessions: Arc<dyn SessionStore>,
    pub journal: Arc<dyn JournalStore>,
}

impl AppState {
    /// Wire every service over one storage backend.
    pub fn new(config: Config, backend: Arc<dyn KeyValueStore>) -> Self {
        let ui = UiStore::new();
        let gateway = ApiGateway::new(&config.api_base_url);
        let sessions: Arc<dyn SessionStore> = Arc::new(KvSessionStore::new(backend.clone()));
        let journal: Arc<dyn JournalStore> =
            Arc::new(KvJournal::new(backend).with_max_entries(config.journal_max_entries));

        let aggregator =
            DashboardAggregator::new(gateway.clone(), ui.clone(), config.workout_window_days);
        let coordinator = WriteCoordinator::new(
            gateway.clone(),
            journal.clone(),
            aggregator.clone(),
            ui.clone(),
        );

        Self {
            config,
            ui,
            gateway,
            aggregator,
            coordinator,
            sessions,
            journal,
        }
    }
}
