//! Job detail page - read-only view of one posting.

use admin_core::{JobPost, format_date, or_dash};
use api::AdminClient;
use dioxus::prelude::*;

use crate::admin::StatusBadge;

/// Props for JobDetailPage.
#[derive(Props, Clone, PartialEq)]
pub struct JobDetailPageProps {
    pub id: String,
}

/// Job detail page component.
#[component]
pub fn JobDetailPage(props: JobDetailPageProps) -> Element {
    let client = use_context::<AdminClient>();
    let mut job = use_signal(|| None::<JobPost>);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);

    let _ = use_resource(use_reactive((&props.id,), move |(id,)| {
        let client = client.clone();
        async move {
            loading.set(true);
            match client.job(&id).await {
                Ok(found) => job.set(Some(found)),
                Err(e) => {
                    tracing::warn!("Failed to fetch job {id}: {e}");
                    error.set(Some(e.message_or("Failed to fetch job details")));
                }
            }
            loading.set(false);
        }
    }));

    if loading() {
        return rsx! {
            div { class: "page-container",
                div { class: "loading", "Loading job details..." }
            }
        };
    }
    if let Some(err) = error() {
        return rsx! {
            div { class: "page-container",
                div { class: "error-banner", "Error: {err}" }
            }
        };
    }
    let Some(job) = job() else {
        return rsx! {
            div { class: "page-container",
                div { class: "empty-state", p { "No job found." } }
            }
        };
    };

    let description = rich_editor::sanitize(&job.job_description);
    let experience = or_dash(job.experience_required.map(|n| format!("{n} Years")));
    let referrals = or_dash(job.no_of_referrals);

    rsx! {
        div { class: "page-container",
            nav { class: "breadcrumb",
                Link { to: "/jobs", class: "breadcrumb-link", "Jobs" }
                span { class: "breadcrumb-separator", "/" }
                span { class: "breadcrumb-current", "{job.job_role}" }
            }

            div { class: "page-header",
                div { class: "page-header-content",
                    if !job.company_logo_url.is_empty() {
                        img { class: "company-logo", src: "{job.company_logo_url}", alt: "{job.company_name}" }
                    }
                    h1 { class: "page-title", "{job.job_role}" }
                    p { class: "page-description", "{job.company_name} · {job.location}" }
                }
                div { class: "page-header-actions",
                    StatusBadge { status: job.status.to_string() }
                    Link {
                        to: "/adminjob/edit/{job.id}",
                        class: "btn btn-primary",
                        "Edit"
                    }
                }
            }

            div { class: "stats-grid",
                div { class: "stat-card",
                    div { class: "stat-card-value", {or_dash(Some(&job.ctc))} }
                    div { class: "stat-card-label", "CTC" }
                }
                div { class: "stat-card",
                    div { class: "stat-card-value", "{experience}" }
                    div { class: "stat-card-label", "Experience Required" }
                }
                div { class: "stat-card",
                    div { class: "stat-card-value", {or_dash(Some(&job.work_mode))} }
                    div { class: "stat-card-label", "Work Mode" }
                }
                div { class: "stat-card",
                    div { class: "stat-card-value", "{referrals}" }
                    div { class: "stat-card-label", "No. of Referrals" }
                }
                div { class: "stat-card",
                    div { class: "stat-card-value", {format_date(&job.end_date)} }
                    div { class: "stat-card-label", "End Date" }
                }
                div { class: "stat-card",
                    div { class: "stat-card-value mono", {or_dash(Some(&job.job_unique_id))} }
                    div { class: "stat-card-label", "Job ID" }
                }
            }

            if !job.job_link.is_empty() {
                a {
                    class: "btn",
                    href: "{job.job_link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View Job"
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Job Description" }
                }
                if description.trim().is_empty() {
                    p { class: "hint", "No description available for this job." }
                } else {
                    div {
                        class: "job-description",
                        dangerous_inner_html: "{description}",
                    }
                }
            }
        }
    }
}
