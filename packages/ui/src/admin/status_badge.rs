//! Status badge component.

use dioxus::prelude::*;

/// Badge for job, withdrawal, ledger and applicant statuses.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let bg_class = match status.to_ascii_lowercase().as_str() {
        "active" | "success" | "hired" | "selected" => "badge-success",
        "inactive" | "failed" | "rejected" => "badge-failed",
        "pending" | "applied" => "badge-pending",
        "shortlisted" | "interview" | "referred" => "badge-running",
        _ => "badge-default",
    };

    rsx! {
        span {
            class: "status-badge {bg_class}",
            {status}
        }
    }
}
