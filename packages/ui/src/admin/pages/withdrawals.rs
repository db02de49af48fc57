//! Withdrawal requests with approve/reject processing.

use admin_core::{ProcessWithdrawal, Withdrawal, WithdrawalAction, format_timestamp};
use api::AdminClient;
use dioxus::prelude::*;

use crate::alert;
use crate::admin::{ErrorBanner, StatusBadge};

/// A decision awaiting confirmation in the modal.
#[derive(Debug, Clone, PartialEq)]
struct PendingDecision {
    withdrawal: Withdrawal,
    action: WithdrawalAction,
}

/// Withdrawals page component.
#[component]
pub fn WithdrawalsPage() -> Element {
    let client = use_context::<AdminClient>();
    let mut withdrawals = use_signal(Vec::<Withdrawal>::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let mut decision = use_signal(|| None::<PendingDecision>);
    let mut description = use_signal(String::new);
    let mut processing = use_signal(|| false);

    let loader = client.clone();
    let mut refresh = use_resource(move || {
        let client = loader.clone();
        async move {
            match client.withdrawals().await {
                Ok(list) => {
                    withdrawals.set(list);
                    error.set(None);
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch withdrawals: {e}");
                    withdrawals.set(Vec::new());
                    error.set(Some(e.message_or("Failed to fetch withdrawals")));
                }
            }
            loading.set(false);
        }
    });

    let mut open = move |withdrawal: Withdrawal, action: WithdrawalAction| {
        description.set(String::new());
        decision.set(Some(PendingDecision { withdrawal, action }));
    };

    let on_confirm = move |_: MouseEvent| {
        let Some(pending) = decision() else {
            return;
        };
        let client = client.clone();
        let body = ProcessWithdrawal {
            transaction_id: pending.withdrawal.transaction_id.clone(),
            action: pending.action,
            description: description().trim().to_string(),
        };
        processing.set(true);
        spawn(async move {
            match client.process_withdrawal(&body).await {
                Ok(_) => {
                    tracing::info!("Withdrawal {} {}", body.transaction_id, body.action.past_tense());
                    alert(&format!("Withdrawal {} successfully", body.action.past_tense()));
                    decision.set(None);
                    refresh.restart();
                }
                Err(e) => {
                    tracing::warn!("Failed to process withdrawal {}: {e}", body.transaction_id);
                    alert(&e.message_or("Error processing withdrawal"));
                }
            }
            processing.set(false);
        });
    };

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Withdrawals" }
                    p { class: "page-description", "Approve or reject wallet withdrawal requests" }
                }
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            div { class: "card",
                if loading() {
                    div { class: "loading", "Loading withdrawals..." }
                } else if withdrawals.read().is_empty() {
                    div { class: "empty-state",
                        p { "No withdrawal requests" }
                    }
                } else {
                    div { class: "table-container",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "User" }
                                    th { "Email" }
                                    th { "UPI ID" }
                                    th { class: "text-right", "Amount" }
                                    th { "Status" }
                                    th { "Timestamp" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for withdrawal in withdrawals.read().iter() {
                                    {
                                        let user = withdrawal.user.clone().unwrap_or_default();
                                        let for_approve = withdrawal.clone();
                                        let for_reject = withdrawal.clone();
                                        rsx! {
                                            tr { key: "{withdrawal.transaction_id}", class: "data-row",
                                                td { "{user.full_name()}" }
                                                td { "{user.email}" }
                                                td { class: "mono", "{withdrawal.upi_id}" }
                                                td { class: "text-right tabular-nums", "{withdrawal.amount}" }
                                                td {
                                                    StatusBadge { status: withdrawal.status.to_string() }
                                                }
                                                td { {format_timestamp(withdrawal.timestamp)} }
                                                td { class: "text-right",
                                                    if withdrawal.is_actionable() {
                                                        button {
                                                            class: "btn btn-small btn-resume",
                                                            onclick: move |_| open(for_approve.clone(), WithdrawalAction::Approve),
                                                            "Approve"
                                                        }
                                                        button {
                                                            class: "btn btn-small btn-danger",
                                                            onclick: move |_| open(for_reject.clone(), WithdrawalAction::Reject),
                                                            "Reject"
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

            if let Some(pending) = decision() {
                div { class: "modal-backdrop",
                    div { class: "modal",
                        h2 { class: "modal-title",
                            "Confirm {pending.action} for {pending.withdrawal.transaction_id}"
                        }
                        p { class: "modal-body",
                            "Amount {pending.withdrawal.amount} to {pending.withdrawal.upi_id}"
                        }
                        textarea {
                            class: "form-textarea",
                            placeholder: pending.action.placeholder(),
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn",
                                disabled: processing(),
                                onclick: move |_| decision.set(None),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-primary",
                                disabled: processing(),
                                onclick: on_confirm,
                                if processing() { "Processing..." } else { "Confirm" }
                            }
                        }
                    }
                }
            }
        }
    }
}
