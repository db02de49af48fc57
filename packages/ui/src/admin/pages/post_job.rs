//! Post a job on behalf of the user picked on the users page.

use admin_core::{JobPost, User};
use api::AdminClient;
use dioxus::prelude::*;

use crate::admin::JobFields;
use crate::{SelectedUser, alert};

/// Post job page component.
#[component]
pub fn PostJobPage() -> Element {
    let SelectedUser(selected) = use_context::<SelectedUser>();

    match selected() {
        Some(user) => rsx! {
            PostJobForm { user }
        },
        None => rsx! {
            div { class: "page-container",
                div { class: "empty-state",
                    p { "No user data provided. Please go back and select a user." }
                    Link { to: "/users", class: "btn", "Go to Users" }
                }
            }
        },
    }
}

#[component]
fn PostJobForm(user: User) -> Element {
    let client = use_context::<AdminClient>();
    let nav = use_navigator();
    let job = use_signal({
        let user = user.clone();
        move || JobPost::draft_for(&user)
    });
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = job();
        if let Err(e) = draft.validate_for_create() {
            alert(&e.to_string());
            return;
        }
        let client = client.clone();
        submitting.set(true);
        spawn(async move {
            match client.create_job(&draft).await {
                Ok(_) => {
                    tracing::info!("Created job {}", draft.job_unique_id);
                    alert("Job posted successfully!");
                    nav.push("/jobs");
                }
                Err(e) => {
                    tracing::warn!("Failed to post job: {e}");
                    alert(&e.message_or("Failed to post job"));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Post Job" }
                    p { class: "page-description", "Posting for {user.full_name()} ({user.email})" }
                }
            }

            form { class: "card form-card", onsubmit: on_submit,
                JobFields { job }
                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Posting..." } else { "Post Job" }
                    }
                }
            }
        }
    }
}
