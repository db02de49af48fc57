//! Wallet withdrawal requests and the admin decision on them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::User;

/// Where a withdrawal request stands.
///
/// Statuses the dashboard does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WithdrawalStatus {
    #[default]
    Pending,
    Success,
    Failed,
    Other(String),
}

impl WithdrawalStatus {
    pub fn as_str(&self) -> &str {
        match self {
            WithdrawalStatus::Pending => "pending",
            WithdrawalStatus::Success => "success",
            WithdrawalStatus::Failed => "failed",
            WithdrawalStatus::Other(s) => s,
        }
    }
}

impl From<String> for WithdrawalStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => WithdrawalStatus::Pending,
            "success" => WithdrawalStatus::Success,
            "failed" => WithdrawalStatus::Failed,
            _ => WithdrawalStatus::Other(s),
        }
    }
}

impl From<WithdrawalStatus> for String {
    fn from(status: WithdrawalStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's request to cash out wallet coins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Withdrawal {
    pub transaction_id: String,
    pub user: Option<User>,
    pub upi_id: String,
    pub amount: f64,
    pub status: WithdrawalStatus,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Withdrawal {
    /// Only pending requests can be approved or rejected.
    pub fn is_actionable(&self) -> bool {
        self.status == WithdrawalStatus::Pending
    }
}

/// The admin decision on a pending withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalAction {
    Approve,
    Reject,
}

impl WithdrawalAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalAction::Approve => "approve",
            WithdrawalAction::Reject => "reject",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            WithdrawalAction::Approve => "approved",
            WithdrawalAction::Reject => "rejected",
        }
    }

    /// Example description offered in the confirmation dialog.
    pub fn placeholder(&self) -> &'static str {
        match self {
            WithdrawalAction::Approve => "E.g. Paid via UPI",
            WithdrawalAction::Reject => "E.g. Incorrect UPI ID",
        }
    }
}

impl std::fmt::Display for WithdrawalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of the withdrawal processing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessWithdrawal {
    pub transaction_id: String,
    pub action: WithdrawalAction,
    pub description: String,
}
