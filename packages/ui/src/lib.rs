//! This crate contains all shared UI for the admin dashboard.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

mod browser;
pub use browser::{alert, prompt, restore_session, sleep_ms};

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

mod context;
pub use context::{SelectedUser, SessionNotice};

pub mod admin;
