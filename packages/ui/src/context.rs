//! Values shared through Dioxus context.

use admin_core::User;
use dioxus::prelude::*;

/// User picked on the users page, consumed by the post-job form.
#[derive(Clone, Copy, PartialEq)]
pub struct SelectedUser(pub Signal<Option<User>>);

impl SelectedUser {
    pub fn new() -> Self {
        Self(Signal::new(None))
    }
}

/// Message for the login page after the session ended on its own.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionNotice(pub Signal<Option<String>>);

impl SessionNotice {
    pub fn new() -> Self {
        Self(Signal::new(None))
    }
}
