//! Push a notification to some or all users.

use admin_core::NotificationDraft;
use api::AdminClient;
use dioxus::prelude::*;

use crate::admin::{Notice, Tone};

/// Send notification page component.
#[component]
pub fn SendNotificationPage() -> Element {
    let client = use_context::<AdminClient>();
    let mut draft = use_signal(NotificationDraft::default);
    let mut feedback = use_signal(|| None::<(Tone, String)>);
    let mut sending = use_signal(|| false);

    let on_send = move |evt: FormEvent| {
        evt.prevent_default();
        let request = match draft.read().to_request() {
            Ok(request) => request,
            Err(e) => {
                feedback.set(Some((Tone::Error, e.to_string())));
                return;
            }
        };
        let client = client.clone();
        sending.set(true);
        spawn(async move {
            match client.send_notification(&request).await {
                Ok(ack) => {
                    tracing::info!("Notification dispatched");
                    feedback.set(Some((
                        Tone::Success,
                        ack.message_or("Notifications sent successfully"),
                    )));
                    draft.set(NotificationDraft::default());
                }
                Err(e) => {
                    tracing::warn!("Failed to send notification: {e}");
                    feedback.set(Some((Tone::Error, e.message_or("Failed to send notifications"))));
                }
            }
            sending.set(false);
        });
    };

    let current = draft();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Send Notifications" }
                    p { class: "page-description", "Leave user IDs empty to notify every user" }
                }
            }

            form { class: "card form-card", onsubmit: on_send,
                div { class: "form-group",
                    label { class: "form-label", "Message" }
                    textarea {
                        class: "form-textarea",
                        rows: "4",
                        value: "{current.message}",
                        oninput: move |evt| draft.write().message = evt.value(),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Post ID (optional)" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        value: "{current.post_id}",
                        oninput: move |evt| draft.write().post_id = evt.value(),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "User IDs (comma separated, optional)" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        value: "{current.user_ids}",
                        oninput: move |evt| draft.write().user_ids = evt.value(),
                    }
                }

                if let Some((tone, message)) = feedback() {
                    Notice { message, tone }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: sending() || !current.is_sendable(),
                        if sending() { "Sending..." } else { "Send Notification" }
                    }
                }
            }
        }
    }
}
