//! Fallback for unknown paths.

use dioxus::prelude::*;

#[component]
pub fn NotFoundPage() -> Element {
    rsx! {
        div { class: "page-container",
            div { class: "empty-state",
                div { class: "empty-state-icon", "404" }
                p { "Page not found" }
                Link { to: "/", class: "btn btn-primary", "Back to Dashboard" }
            }
        }
    }
}
