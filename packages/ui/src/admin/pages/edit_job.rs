//! Edit an existing job posting.

use admin_core::JobPost;
use api::AdminClient;
use dioxus::prelude::*;

use crate::admin::{ErrorBanner, JobFields};
use crate::alert;

/// Props for EditJobPage.
#[derive(Props, Clone, PartialEq)]
pub struct EditJobPageProps {
    pub id: String,
}

/// Edit job page component.
#[component]
pub fn EditJobPage(props: EditJobPageProps) -> Element {
    let client = use_context::<AdminClient>();
    let nav = use_navigator();
    let mut job = use_signal(JobPost::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);

    let loader = client.clone();
    let _ = use_resource(use_reactive((&props.id,), move |(id,)| {
        let client = loader.clone();
        async move {
            loading.set(true);
            match client.job(&id).await {
                Ok(found) => job.set(found),
                Err(e) => {
                    tracing::warn!("Failed to load job {id} for editing: {e}");
                    error.set(Some(e.message_or("Failed to fetch job details")));
                }
            }
            loading.set(false);
        }
    }));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let record = job();
        saving.set(true);
        error.set(None);
        spawn(async move {
            match client.update_job(&record).await {
                Ok(_) => {
                    tracing::info!("Updated job {}", record.id);
                    nav.push("/jobs");
                }
                Err(e) => {
                    tracing::warn!("Failed to update job {}: {e}", record.id);
                    alert(&e.message_or("Failed to update job"));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Edit Job" }
                    p { class: "page-description mono", "{props.id}" }
                }
            }

            if let Some(err) = error() {
                ErrorBanner {
                    message: err,
                    on_dismiss: move |_| error.set(None),
                }
            }

            if loading() {
                div { class: "loading", "Loading job details..." }
            } else {
                form { class: "card form-card", onsubmit: on_submit,
                    JobFields { job, editing: true }
                    div { class: "form-actions",
                        Link { to: "/jobs", class: "btn", "Cancel" }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save Changes" }
                        }
                    }
                }
            }
        }
    }
}
