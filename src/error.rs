// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error taxonomy.
//!
//! Every failure ends up as a user-visible status string; none of these
//! errors is fatal to the process.

/// Application error type shared by the gateway, stores and coordinators.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Local, pre-network rejection (missing required field, bad number).
    #[error("{0}")]
    Validation(String),

    /// Transport failure: connection refused, DNS, reset, ...
    #[error("{0}")]
    Network(String),

    /// Non-2xx response; `message` is the response body verbatim.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Unexpected response from {resource}: {message}")]
    Decode {
        resource: &'static str,
        message: String,
    },

    /// One of the dashboard reads failed, so the whole refresh failed.
    #[error("{source}")]
    Aggregation {
        resource: &'static str,
        #[source]
        source: Box<AppError>,
    },

    /// Local session/journal persistence failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Build an HTTP error from a status code and response body.
    ///
    /// An empty body falls back to a generic `Request failed` message so the
    /// user never sees a blank banner.
    pub fn http(status: u16, body: String) -> Self {
        let message = if body.trim().is_empty() {
            format!("Request failed: {}", status)
        } else {
            body
        };
        AppError::Http { status, message }
    }

    /// Wrap a failed dashboard read.
    pub fn aggregation(resource: &'static str, source: AppError) -> Self {
        AppError::Aggregation {
            resource,
            source: Box::new(source),
        }
    }

    /// The message shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// True for failures that never reached the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    /// The innermost error, looking through aggregation wrappers.
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Aggregation { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "invalid form input".to_string());
        AppError::Validation(message)
    }
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;
