// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Text presenters for a rendered [`Screen`].
//!
//! Both front-ends consume the same screen and differ only in layout.

pub mod compact;
pub mod panel;

pub use compact::CompactPresenter;
pub use panel::PanelPresenter;

use crate::config::FrontendKind;
use crate::models::Provider;
use crate::render::Screen;

/// Turns a screen into printable text.
pub trait Presenter: Send + Sync {
    fn present(&self, screen: &Screen) -> String;
}

pub fn presenter_for(kind: FrontendKind) -> Box<dyn Presenter> {
    match kind {
        FrontendKind::Panel => Box::new(PanelPresenter),
        FrontendKind::Compact => Box::new(CompactPresenter),
    }
}

/// Provider picker line shared by both auth gates, e.g. `[guest] google facebook`.
pub(crate) fn provider_picker(selected: Provider) -> String {
    [Provider::Guest, Provider::Google, Provider::Facebook]
        .into_iter()
        .map(|p| {
            if p == selected {
                format!("[{}]", p)
            } else {
                p.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop the first `offset` body lines.
pub(crate) fn scrolled(lines: Vec<String>, offset: u32) -> Vec<String> {
    lines.into_iter().skip(offset as usize).collect()
}
