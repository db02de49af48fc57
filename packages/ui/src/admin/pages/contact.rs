//! Messages left through the public contact form.

use admin_core::{ContactMessage, format_timestamp};
use api::AdminClient;
use dioxus::prelude::*;

use crate::admin::ErrorBanner;

/// Contact messages page component.
#[component]
pub fn ContactPage() -> Element {
    let client = use_context::<AdminClient>();
    let mut messages = use_signal(Vec::<ContactMessage>::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            match client.contact_messages().await {
                Ok(list) => messages.set(list),
                Err(e) => {
                    tracing::warn!("Failed to fetch contact messages: {e}");
                    error.set(Some(e.message_or("Failed to fetch messages")));
                }
            }
            loading.set(false);
        }
    });

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Contact Messages" }
                    p { class: "page-description", "Messages sent through the contact form" }
                }
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            } else {
                div { class: "card",
                    if loading() {
                        div { class: "loading", "Loading messages..." }
                    } else if messages.read().is_empty() {
                        div { class: "empty-state",
                            p { "No messages yet" }
                        }
                    } else {
                        div { class: "table-container",
                            table { class: "data-table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Email" }
                                        th { "Mobile" }
                                        th { "Message" }
                                        th { "Date" }
                                    }
                                }
                                tbody {
                                    for message in messages.read().iter() {
                                        tr { key: "{message.id}", class: "data-row",
                                            td { "{message.sender()}" }
                                            td { "{message.email}" }
                                            td { "{message.mobile}" }
                                            td { class: "message-cell", "{message.message}" }
                                            td { {format_timestamp(message.created_at)} }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
