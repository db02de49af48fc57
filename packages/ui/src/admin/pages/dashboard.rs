//! Landing page with a card per dashboard section.

use dioxus::prelude::*;

/// `(route, title, description)` for each section card.
const SECTIONS: &[(&str, &str, &str)] = &[
    ("/users", "Users", "Browse users and post jobs on their behalf"),
    ("/jobs", "Jobs", "Review, edit and inspect job postings"),
    ("/withdrawals", "Withdrawals", "Approve or reject wallet withdrawals"),
    ("/applicantstatus", "Applicant Status", "Track who applied where"),
    ("/contact", "Contact Messages", "Read messages sent through the contact form"),
    ("/send-email", "Send Email", "Share referrals by email"),
    ("/send-notifications", "Send Notifications", "Push a notification to users"),
];

/// Dashboard landing page.
#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-description", "Manage the referral platform" }
                }
            }

            div { class: "stats-grid",
                for (route, title, description) in SECTIONS.iter().copied() {
                    Link {
                        key: "{route}",
                        to: route,
                        class: "stat-card nav-card",
                        div { class: "stat-card-value", "{title}" }
                        div { class: "stat-card-label", "{description}" }
                    }
                }
            }
        }
    }
}
