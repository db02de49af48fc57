// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use admin_core::{Access, SessionEvent, check_access};
use api::{AdminClient, ClientConfig};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::admin::{
    ApplicantStatusPage, ContactPage, DashboardPage, EditJobPage, JobDetailPage, JobsPage,
    LoginPage, NotFoundPage, PostJobPage, PostedJobsPage, SendEmailPage, SendNotificationPage,
    UsersPage, WalletPage, WithdrawalsPage,
};
use ui::{SelectedUser, SessionNotice};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/admin-login")]
    AdminLogin {},

    // Signed-in routes with sidebar navigation
    #[layout(AdminLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/post-job")]
        PostJob {},
        #[route("/jobs")]
        Jobs {},
        #[route("/adminjob/jobdetail/:id")]
        JobDetail { id: String },
        #[route("/adminjob/edit/:id")]
        EditJob { id: String },
        #[route("/user-wallet/:user_id")]
        UserWallet { user_id: String },
        #[route("/withdrawals")]
        Withdrawals {},
        #[route("/posted-jobs/:user_id")]
        PostedJobs { user_id: String },
        #[route("/applicantstatus")]
        ApplicantStatus {},
        #[route("/contact")]
        Contact {},
        #[route("/send-email")]
        SendEmail {},
        #[route("/send-notifications")]
        SendNotifications {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const ADMIN_CSS: Asset = asset!("/assets/admin.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logging: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| AdminClient::http(ClientConfig::from_env(), ui::restore_session()));
    use_context_provider(SelectedUser::new);
    use_context_provider(SessionNotice::new);

    rsx! {
        document::Link { rel: "stylesheet", href: ADMIN_CSS }

        Router::<Route> {}
    }
}

/// `(route, label, icon)` for each sidebar entry.
const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/", "Dashboard", "▦"),
    ("/users", "Users", "☺"),
    ("/jobs", "Jobs", "☰"),
    ("/withdrawals", "Withdrawals", "⇄"),
    ("/applicantstatus", "Applicant Status", "✓"),
    ("/contact", "Contact", "✉"),
    ("/send-email", "Send Email", "➤"),
    ("/send-notifications", "Send Notifications", "♪"),
];

/// Layout for signed-in routes: sidebar, header and the session guard.
#[component]
fn AdminLayout() -> Element {
    let client = use_context::<AdminClient>();
    let SessionNotice(notice) = use_context::<SessionNotice>();
    let nav = use_navigator();
    let authenticated = use_signal(|| client.session().is_authenticated());

    let session = client.session().clone();
    let subscription = use_hook(move || {
        session.subscribe(move |event: &SessionEvent| {
            tracing::debug!("Session {}", event.description());
            let (mut authenticated, mut notice) = (authenticated, notice);
            match event {
                SessionEvent::SignedIn => {
                    notice.set(None);
                    authenticated.set(true);
                }
                SessionEvent::Invalidated { reason } => {
                    notice.set(reason.notice().map(str::to_string));
                    authenticated.set(false);
                }
            }
        })
    });
    {
        let session = client.session().clone();
        use_drop(move || session.unsubscribe(subscription));
    }

    use_effect(move || {
        if check_access(authenticated(), false) == Access::RedirectToLogin {
            nav.replace(Route::AdminLogin {});
        }
    });

    let on_logout = move |_| {
        tracing::info!("Admin logged out");
        client.logout();
    };

    if !authenticated() {
        return rsx! {};
    }

    rsx! {
        div { class: "admin-layout",
            aside { class: "admin-sidebar",
                div { class: "sidebar-header",
                    h1 { class: "sidebar-logo", "Referral Admin" }
                }
                nav { class: "sidebar-nav",
                    div { class: "nav-section",
                        span { class: "nav-section-title", "Menu" }
                        for (route, label, icon) in NAV_ITEMS.iter().copied() {
                            Link {
                                key: "{route}",
                                to: route,
                                class: "nav-link",
                                active_class: "active",
                                span { class: "nav-icon", "{icon}" }
                                span { "{label}" }
                            }
                        }
                    }
                }
                div { class: "sidebar-footer",
                    button {
                        class: "nav-link nav-link-muted",
                        onclick: on_logout,
                        span { class: "nav-icon", "⏻" }
                        span { "Logout" }
                    }
                }
            }

            main { class: "admin-main",
                header { class: "admin-header",
                    h2 { "Admin Dashboard" }
                }
                Outlet::<Route> {}
            }
        }
    }
}

/// Login page; signed-in visitors go straight to the dashboard.
#[component]
fn AdminLogin() -> Element {
    let client = use_context::<AdminClient>();
    let SessionNotice(notice) = use_context::<SessionNotice>();
    let nav = use_navigator();

    let authenticated = client.session().is_authenticated();
    use_effect(move || {
        if check_access(authenticated, true) == Access::RedirectToDashboard {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        LoginPage { notice: notice() }
    }
}

#[component]
fn Dashboard() -> Element {
    rsx! {
        DashboardPage {}
    }
}

#[component]
fn Users() -> Element {
    rsx! {
        UsersPage {}
    }
}

#[component]
fn PostJob() -> Element {
    rsx! {
        PostJobPage {}
    }
}

#[component]
fn Jobs() -> Element {
    rsx! {
        JobsPage {}
    }
}

#[component]
fn JobDetail(id: String) -> Element {
    rsx! {
        JobDetailPage { id }
    }
}

#[component]
fn EditJob(id: String) -> Element {
    rsx! {
        EditJobPage { id }
    }
}

#[component]
fn UserWallet(user_id: String) -> Element {
    rsx! {
        WalletPage { user_id }
    }
}

#[component]
fn Withdrawals() -> Element {
    rsx! {
        WithdrawalsPage {}
    }
}

#[component]
fn PostedJobs(user_id: String) -> Element {
    rsx! {
        PostedJobsPage { user_id }
    }
}

#[component]
fn ApplicantStatus() -> Element {
    rsx! {
        ApplicantStatusPage {}
    }
}

#[component]
fn Contact() -> Element {
    rsx! {
        ContactPage {}
    }
}

#[component]
fn SendEmail() -> Element {
    rsx! {
        SendEmailPage {}
    }
}

#[component]
fn SendNotifications() -> Element {
    rsx! {
        SendNotificationPage {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::warn!("No route for /{}", segments.join("/"));
    rsx! {
        NotFoundPage {}
    }
}
