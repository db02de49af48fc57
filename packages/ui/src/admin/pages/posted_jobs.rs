//! Jobs posted by one user.

use admin_core::{JobPost, format_date};
use api::AdminClient;
use dioxus::prelude::*;

use crate::admin::{ErrorBanner, StatusBadge};

/// Props for PostedJobsPage.
#[derive(Props, Clone, PartialEq)]
pub struct PostedJobsPageProps {
    pub user_id: String,
}

/// Posted jobs page component.
#[component]
pub fn PostedJobsPage(props: PostedJobsPageProps) -> Element {
    let client = use_context::<AdminClient>();
    let nav = use_navigator();
    let mut jobs = use_signal(Vec::<JobPost>::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);

    let _ = use_resource(use_reactive((&props.user_id,), move |(user_id,)| {
        let client = client.clone();
        async move {
            loading.set(true);
            match client.jobs_by_user(&user_id).await {
                Ok(list) => {
                    jobs.set(list);
                    error.set(None);
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch jobs for {user_id}: {e}");
                    jobs.set(Vec::new());
                    error.set(Some(e.message_or("Failed to fetch jobs")));
                }
            }
            loading.set(false);
        }
    }));

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Posted Jobs" }
                    p { class: "page-description mono", "{props.user_id}" }
                }
                button {
                    class: "btn",
                    onclick: move |_| nav.go_back(),
                    "Back"
                }
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            div { class: "card",
                if loading() {
                    div { class: "loading", "Loading jobs..." }
                } else if jobs.read().is_empty() {
                    div { class: "empty-state",
                        p { "This user has not posted any jobs" }
                    }
                } else {
                    div { class: "table-container",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Job Role" }
                                    th { "Company" }
                                    th { "Job Unique Id" }
                                    th { "Status" }
                                    th { "End Date" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for job in jobs.read().iter() {
                                    tr { key: "{job.id}", class: "data-row",
                                        td { "{job.job_role}" }
                                        td { "{job.company_name}" }
                                        td { class: "mono", "{job.job_unique_id}" }
                                        td {
                                            StatusBadge { status: job.status.to_string() }
                                        }
                                        td { {format_date(&job.end_date)} }
                                        td { class: "text-right",
                                            Link {
                                                to: "/adminjob/jobdetail/{job.id}",
                                                class: "btn btn-small",
                                                "View"
                                            }
                                            Link {
                                                to: "/adminjob/edit/{job.id}",
                                                class: "btn btn-small btn-primary",
                                                "Edit"
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
}
