//! Share referrals with a list of email recipients.

use admin_core::{RecipientError, RecipientList};
use api::AdminClient;
use dioxus::prelude::*;

use crate::admin::{Notice, Tone};

/// Send email page component.
#[component]
pub fn SendEmailPage() -> Element {
    let client = use_context::<AdminClient>();
    let mut recipients = use_signal(RecipientList::new);
    let mut draft = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut feedback = use_signal(|| None::<(Tone, String)>);
    let mut sending = use_signal(|| false);

    let mut add_recipient = move || {
        let input = draft();
        match recipients.write().add(&input) {
            Ok(()) => {
                draft.set(String::new());
                feedback.set(None);
            }
            Err(RecipientError::Empty) => {}
            Err(e) if e.is_warning() => feedback.set(Some((Tone::Warning, e.to_string()))),
            Err(e) => feedback.set(Some((Tone::Error, e.to_string()))),
        }
    };

    let on_send = move |evt: FormEvent| {
        evt.prevent_default();
        if client.session().token().is_none() {
            feedback.set(Some((Tone::Error, "You are not signed in.".to_string())));
            return;
        }
        let request = match recipients.read().to_request(&subject()) {
            Ok(request) => request,
            Err(e) => {
                feedback.set(Some((Tone::Error, e.to_string())));
                return;
            }
        };
        let client = client.clone();
        sending.set(true);
        spawn(async move {
            match client.send_email(&request).await {
                Ok(ack) => {
                    tracing::info!("Sent referral email to {} recipients", request.to.len());
                    feedback.set(Some((Tone::Success, ack.message_or("Email sent successfully"))));
                    recipients.write().clear();
                    subject.set(String::new());
                }
                Err(e) => {
                    tracing::warn!("Failed to send email: {e}");
                    feedback.set(Some((Tone::Error, e.message_or("Failed to send email"))));
                }
            }
            sending.set(false);
        });
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Send Email" }
                    p { class: "page-description", "Share a referral email with selected recipients" }
                }
            }

            form { class: "card form-card", onsubmit: on_send,
                div { class: "form-group",
                    label { class: "form-label", "Recipient" }
                    div { class: "input-row",
                        input {
                            class: "form-input",
                            r#type: "email",
                            placeholder: "name@example.com",
                            value: "{draft}",
                            oninput: move |evt| draft.set(evt.value()),
                            onkeydown: move |evt| {
                                if evt.key() == Key::Enter {
                                    evt.prevent_default();
                                    add_recipient();
                                }
                            },
                        }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| add_recipient(),
                            "Add"
                        }
                    }
                }

                if !recipients.read().is_empty() {
                    div { class: "chip-list",
                        for email in recipients.read().emails().iter().cloned() {
                            span { key: "{email}", class: "chip",
                                "{email}"
                                button {
                                    class: "chip-remove",
                                    r#type: "button",
                                    onclick: move |_| recipients.write().remove(&email),
                                    "×"
                                }
                            }
                        }
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", "Subject" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        value: "{subject}",
                        oninput: move |evt| subject.set(evt.value()),
                    }
                }

                if let Some((tone, message)) = feedback() {
                    Notice { message, tone }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: sending(),
                        if sending() { "Sending..." } else { "Send Email" }
                    }
                }
            }
        }
    }
}
