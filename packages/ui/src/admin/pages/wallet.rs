//! Wallet balances and ledger of one user.

use admin_core::{TransactionFilter, format_timestamp, or_dash};
use api::{AdminClient, WalletOverview};
use dioxus::prelude::*;

use crate::admin::{ErrorBanner, StatusBadge};

/// Props for WalletPage.
#[derive(Props, Clone, PartialEq)]
pub struct WalletPageProps {
    pub user_id: String,
}

/// Wallet page component.
#[component]
pub fn WalletPage(props: WalletPageProps) -> Element {
    let client = use_context::<AdminClient>();
    let mut overview = use_signal(|| None::<WalletOverview>);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let mut filter = use_signal(TransactionFilter::default);

    let _ = use_resource(use_reactive((&props.user_id,), move |(user_id,)| {
        let client = client.clone();
        async move {
            loading.set(true);
            match client.wallet_overview(&user_id).await {
                Ok(found) => {
                    overview.set(Some(found));
                    error.set(None);
                }
                Err(e) => {
                    tracing::warn!("Failed to load wallet for {user_id}: {e}");
                    overview.set(None);
                    error.set(Some("Failed to load wallet data".to_string()));
                }
            }
            loading.set(false);
        }
    }));

    let data = overview();
    let lines = data
        .as_ref()
        .map(|o| filter().apply(&o.ledger))
        .unwrap_or_default();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "User Wallet" }
                    p { class: "page-description mono", "{props.user_id}" }
                }
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            if loading() {
                div { class: "loading", "Loading wallet..." }
            } else if let Some(data) = data {
                div { class: "stats-grid",
                    div { class: "stat-card",
                        div { class: "stat-card-value", "{data.wallet.coins}" }
                        div { class: "stat-card-label", "Coins" }
                    }
                    div { class: "stat-card",
                        div { class: "stat-card-value", "{data.wallet.blocked_coins}" }
                        div { class: "stat-card-label", "Blocked Coins" }
                    }
                }

                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Transactions" }
                        div { class: "filter-tabs",
                            for option in TransactionFilter::ALL {
                                button {
                                    key: "{option}",
                                    class: if filter() == option { "btn btn-small active" } else { "btn btn-small" },
                                    onclick: move |_| filter.set(option),
                                    "{option}"
                                }
                            }
                        }
                    }

                    if lines.is_empty() {
                        div { class: "empty-state",
                            p { "No transactions" }
                        }
                    } else {
                        div { class: "table-container",
                            table { class: "data-table",
                                thead {
                                    tr {
                                        th { "Transaction ID" }
                                        th { "Type" }
                                        th { class: "text-right", "Amount" }
                                        th { "Status" }
                                        th { class: "text-right", "Balance After" }
                                        th { "Description" }
                                        th { "Timestamp" }
                                    }
                                }
                                tbody {
                                    for (idx, line) in lines.iter().enumerate() {
                                        tr { key: "{line.transaction_id}-{idx}", class: "data-row",
                                            td { class: "mono", "{line.transaction_id}" }
                                            td { "{line.entry.kind}" }
                                            td { class: "text-right tabular-nums", "{line.entry.amount}" }
                                            td {
                                                StatusBadge { status: line.entry.status.clone() }
                                            }
                                            td { class: "text-right tabular-nums", {or_dash(line.entry.balance_after)} }
                                            td { {or_dash(line.entry.description.as_deref())} }
                                            td { {format_timestamp(line.entry.timestamp)} }
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
