//! Jobs list page - every posting with view and edit actions.

use admin_core::format_date;
use dioxus::prelude::*;

use crate::admin::{ErrorBanner, PaginationControls, StatusBadge, use_paged_list};

/// Jobs list page component.
#[component]
pub fn JobsPage() -> Element {
    let jobs = use_paged_list("Failed to fetch jobs", |client, page| async move {
        client.jobs(page).await
    });
    let list = jobs.list.read();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Jobs" }
                    p { class: "page-description", "Every job posted on the platform" }
                }
            }

            if let Some(err) = list.error() {
                ErrorBanner { message: err.to_string() }
            }

            div { class: "card",
                if list.is_loading() {
                    div { class: "loading", "Loading jobs..." }
                } else if list.rows().is_empty() {
                    div { class: "empty-state",
                        p { "No jobs found" }
                    }
                } else {
                    div { class: "table-container",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Job Role" }
                                    th { "Company" }
                                    th { "Job Unique Id" }
                                    th { "Posted by" }
                                    th { "Status" }
                                    th { "End Date" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for job in list.rows().iter() {
                                    tr { key: "{job.id}", class: "data-row",
                                        td { "{job.job_role}" }
                                        td { "{job.company_name}" }
                                        td { class: "mono", "{job.job_unique_id}" }
                                        td { {job.posted_by_email().unwrap_or("N/A")} }
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
                    PaginationControls {
                        pagination: list.pagination(),
                        on_page: move |page| jobs.go_to(page),
                    }
                }
            }
        }
    }
}
