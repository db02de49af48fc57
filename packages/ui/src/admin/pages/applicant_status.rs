//! Applicant statuses - who applied to which posting.

use admin_core::format_timestamp;
use dioxus::prelude::*;

use crate::admin::{ErrorBanner, PaginationControls, StatusBadge, use_paged_list};

/// Applicant status page component.
#[component]
pub fn ApplicantStatusPage() -> Element {
    let statuses = use_paged_list("Failed to fetch applicant statuses", |client, page| async move {
        client.applicant_statuses(page).await
    });
    let list = statuses.list.read();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Applicant Status" }
                    p { class: "page-description", "Applications across all job postings" }
                }
            }

            if let Some(err) = list.error() {
                ErrorBanner { message: err.to_string() }
            }

            div { class: "card",
                if list.is_loading() {
                    div { class: "loading", "Loading applicant statuses..." }
                } else if list.rows().is_empty() {
                    div { class: "empty-state",
                        p { "No applications yet" }
                    }
                } else {
                    div { class: "table-container",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Applicant" }
                                    th { "Status" }
                                    th { "Applied At" }
                                    th { "Job Role" }
                                    th { "Company" }
                                    th { "Job Link" }
                                    th { "Posted By" }
                                }
                            }
                            tbody {
                                for status in list.rows().iter() {
                                    {
                                        let applicant = status.applicant().cloned().unwrap_or_default();
                                        let job = status.job().cloned().unwrap_or_default();
                                        let poster = job.poster().map(|u| u.email.clone()).unwrap_or_else(|| "N/A".to_string());
                                        rsx! {
                                            tr { key: "{status.id}", class: "data-row",
                                                td {
                                                    div { "{applicant.full_name()}" }
                                                    div { class: "hint", "{applicant.email}" }
                                                }
                                                td {
                                                    StatusBadge { status: status.status.clone() }
                                                }
                                                td { {format_timestamp(status.applied_at)} }
                                                td { "{job.job_role}" }
                                                td { "{job.company_name}" }
                                                td {
                                                    if !job.job_link.is_empty() {
                                                        a {
                                                            href: "{job.job_link}",
                                                            target: "_blank",
                                                            rel: "noopener noreferrer",
                                                            "Open"
                                                        }
                                                    }
                                                }
                                                td { "{poster}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    PaginationControls {
                        pagination: list.pagination(),
                        on_page: move |page| statuses.go_to(page),
                    }
                }
            }
        }
    }
}
