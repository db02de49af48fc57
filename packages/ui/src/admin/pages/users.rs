//! Users list page - paginated users with per-user job actions.

use dioxus::prelude::*;

use crate::SelectedUser;
use crate::admin::{ErrorBanner, PaginationControls, use_paged_list};

/// Users list page component.
#[component]
pub fn UsersPage() -> Element {
    let users = use_paged_list("Failed to fetch users", |client, page| async move {
        client.users(page).await
    });
    let SelectedUser(mut selected) = use_context::<SelectedUser>();
    let nav = use_navigator();

    let list = users.list.read();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Users" }
                    p { class: "page-description", "All registered users" }
                }
            }

            if let Some(err) = list.error() {
                ErrorBanner { message: err.to_string() }
            }

            div { class: "card",
                if list.is_loading() {
                    div { class: "loading", "Loading users..." }
                } else if list.rows().is_empty() {
                    div { class: "empty-state",
                        p { "No users found" }
                    }
                } else {
                    div { class: "table-container",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "User ID" }
                                    th { "First Name" }
                                    th { "Email" }
                                    th { "Present Company" }
                                    th { "Position" }
                                    th { class: "text-right", "Action" }
                                }
                            }
                            tbody {
                                for user in list.rows().iter() {
                                    {
                                        let user_for_post = user.clone();
                                        let user_id = user.id.clone();
                                        rsx! {
                                            tr { key: "{user.id}", class: "data-row",
                                                td { class: "mono", "{user.id}" }
                                                td { "{user.first_name}" }
                                                td { "{user.email}" }
                                                td { "{user.company_name()}" }
                                                td { "{user.company_role()}" }
                                                td { class: "text-right",
                                                    button {
                                                        class: "btn btn-small btn-primary",
                                                        onclick: move |_| {
                                                            tracing::info!("Posting a job for user {}", user_for_post.id);
                                                            selected.set(Some(user_for_post.clone()));
                                                            nav.push("/post-job");
                                                        },
                                                        "Post Job"
                                                    }
                                                    Link {
                                                        to: "/posted-jobs/{user_id}",
                                                        class: "btn btn-small",
                                                        "View Posted Jobs"
                                                    }
                                                    Link {
                                                        to: "/user-wallet/{user_id}",
                                                        class: "btn btn-small",
                                                        "Wallet"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    PaginationControls {
                        pagination: list.pagination(),
                        on_page: move |page| users.go_to(page),
                    }
                }
            }
        }
    }
}
