//! Inline error and notice banners.

use dioxus::prelude::*;

/// Dismissable error banner.
#[component]
pub fn ErrorBanner(message: String, on_dismiss: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "error-banner",
            span { "{message}" }
            if let Some(on_dismiss) = on_dismiss {
                button {
                    onclick: move |_| on_dismiss.call(()),
                    "×"
                }
            }
        }
    }
}

/// How a [`Notice`] is styled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Success,
    Warning,
    Error,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Success => "notice notice-success",
            Tone::Warning => "notice notice-warning",
            Tone::Error => "notice notice-error",
        }
    }
}

/// Inline outcome message under a form.
#[component]
pub fn Notice(message: String, #[props(default)] tone: Tone) -> Element {
    rsx! {
        div { class: tone.class(), "{message}" }
    }
}
