// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! NOX terminal client
//!
//! Loading screen, sign-in gate and the workspace REPL over the shared sync
//! layer. Logs go to stderr so they never interleave with the screen.

use anyhow::Context;
use nox_client::{
    cli::{self, CliError, Command, SubmitTarget},
    config::{Config, LogFormat},
    flow::FlowController,
    frontend::{presenter_for, Presenter},
    render::render,
    store::{FileStore, KeyValueStore, MemoryStore},
    AppState,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    init_logging(config.log_format);
    tracing::info!(base_url = %config.api_base_url, frontend = ?config.frontend, "Starting NOX client");

    let backend = open_backend(&config);
    let state = Arc::new(AppState::new(config.clone(), backend));
    let flow = FlowController::new(state.clone());
    let presenter = presenter_for(config.frontend);

    // Loading screen, then auto-login or the gate
    let loading = {
        let flow = flow.clone();
        tokio::spawn(async move { flow.start().await })
    };
    tokio::task::yield_now().await;
    show(&state, presenter.as_ref());
    loading.await.context("Loading task failed")?;
    show(&state, presenter.as_ref());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CliError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", cli::help());
                continue;
            }
            Command::Journal => {
                print_journal(&flow);
                continue;
            }
            other => {
                if let Err(e) = dispatch(&flow, other).await {
                    tracing::debug!(error = %e, "Command failed");
                }
            }
        }
        show(&state, presenter.as_ref());
    }

    tracing::info!("Exiting");
    Ok(())
}

async fn dispatch(flow: &FlowController, command: Command) -> nox_client::error::Result<()> {
    match command {
        Command::Login { name } => flow.complete_auth(&name.join(" ")).await.map(drop),
        Command::Provider { provider } => {
            flow.select_provider(provider);
            Ok(())
        }
        Command::Show { module } => {
            flow.select_module(module);
            Ok(())
        }
        Command::Set { field, value } => flow.edit_form(field, &value.join(" ")),
        Command::Submit { target } => match target {
            SubmitTarget::Workout => flow.submit_workout().await.map(drop),
            SubmitTarget::Meal => flow.submit_meal().await.map(drop),
            SubmitTarget::Goal => flow.submit_profile().await.map(drop),
            SubmitTarget::Recipes => flow.search_recipes().await.map(drop),
        },
        Command::Refresh => flow.refresh().await.map(drop),
        Command::Scroll { lines } => {
            flow.scroll(lines);
            Ok(())
        }
        Command::SignOut => flow.sign_out(),
        Command::Journal | Command::Help | Command::Quit => Ok(()),
    }
}

fn show(state: &AppState, presenter: &dyn Presenter) {
    let screen = state.ui.read(render);
    print!("{}", presenter.present(&screen));
}

fn print_journal(flow: &FlowController) {
    match flow.journal() {
        Ok(entries) if entries.is_empty() => println!("Journal is empty."),
        Ok(entries) => {
            for entry in entries {
                println!(
                    "{} {} [{}] {}",
                    entry.timestamp, entry.kind, entry.provider, entry.payload
                );
            }
        }
        Err(e) => println!("Journal unavailable: {}", e),
    }
}

/// Persist under the data directory, or fall back to memory for this run.
fn open_backend(config: &Config) -> Arc<dyn KeyValueStore> {
    let opened = config
        .resolve_data_dir()
        .map_err(|e| e.to_string())
        .and_then(|dir| FileStore::open(&dir).map_err(|e| e.to_string()));

    match opened {
        Ok(store) => {
            tracing::info!(dir = %store.dir().display(), "Local store opened");
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Local store unavailable, session will not persist");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Initialize logging on stderr.
fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nox_client=debug,nox=debug,info"));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
