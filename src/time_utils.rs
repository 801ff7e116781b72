// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{Local, NaiveDateTime};

/// Today's local date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Local wall-clock timestamp for journal entries, e.g. `2026-03-02T18:04:11.532`.
pub fn local_timestamp() -> String {
    format_local_timestamp(Local::now().naive_local())
}

pub fn format_local_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}
