// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command parser for the terminal front-end.
//!
//! Each input line is one clap invocation in multicall mode: the first word
//! is the subcommand, the rest are its arguments.

use crate::models::{FormField, Provider};
use crate::state::Module;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

/// One line typed at the workspace prompt.
#[derive(Parser, Debug)]
#[command(
    name = "nox",
    multicall = true,
    disable_help_subcommand = true,
    disable_help_flag = true
)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

/// Which form `submit` sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SubmitTarget {
    Workout,
    Meal,
    #[value(alias = "profile")]
    Goal,
    #[value(alias = "recipe")]
    Recipes,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Complete the sign-in gate
    Login {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Highlight a provider: google | facebook | guest
    Provider { provider: Provider },

    /// Show a module: dashboard | workout | meal | plan | recipes
    Show { module: Module },

    /// Edit a form field, e.g. `set exercise Bench Press`
    Set {
        field: FormField,
        /// Omitted clears the field
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Send a form: workout | meal | goal | recipes
    Submit {
        #[arg(value_enum, ignore_case = true)]
        target: SubmitTarget,
    },

    /// Re-fetch the dashboard
    Refresh,

    /// Scroll the active module by n lines
    Scroll {
        #[arg(allow_negative_numbers = true)]
        lines: i64,
    },

    /// List confirmed writes for this identity
    Journal,

    /// Forget the stored session
    #[command(name = "signout", alias = "logout")]
    SignOut,

    /// Show this text
    Help,

    /// Exit
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', try `help`")]
    Unknown(String),

    /// Clap's rendered message: bad value, missing argument and so on
    #[error("{0}")]
    Rejected(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CliError> {
        let mut words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        let Some(verb) = words.first_mut() else {
            return Err(CliError::Empty);
        };
        *verb = verb.to_lowercase();
        if Line::command().find_subcommand(verb.as_str()).is_none() {
            return Err(CliError::Unknown(verb.clone()));
        }

        Line::try_parse_from(&words)
            .map(|parsed| parsed.command)
            .map_err(|e| CliError::Rejected(e.render().to_string().trim_end().to_string()))
    }
}

/// Command summary generated from the parser definition.
pub fn help() -> String {
    Line::command().render_help().to_string()
}
