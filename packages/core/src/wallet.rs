//! Wallet balances and ledger history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's wallet balances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Wallet {
    pub coins: f64,
    pub blocked_coins: f64,
}

/// One ledger line inside a wallet transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub status: String,
    pub balance_after: Option<f64>,
    pub description: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// A container of ledger entries as returned by the transactions endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WalletTransaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub history: Vec<HistoryEntry>,
}

/// A history entry tagged with the transaction it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerLine {
    pub transaction_id: String,
    pub user_id: String,
    pub entry: HistoryEntry,
}

impl LedgerLine {
    /// Flatten every transaction's history into one list, preserving order.
    pub fn flatten(transactions: &[WalletTransaction]) -> Vec<LedgerLine> {
        transactions
            .iter()
            .flat_map(|tx| {
                tx.history.iter().map(move |entry| LedgerLine {
                    transaction_id: tx.id.clone(),
                    user_id: tx.user_id.clone(),
                    entry: entry.clone(),
                })
            })
            .collect()
    }
}

/// Ledger filter tabs shown on the wallet page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TransactionFilter {
    #[default]
    All,
    Reward,
    Spend,
    Withdraw,
    Refund,
    Purchase,
}

impl TransactionFilter {
    pub const ALL: [TransactionFilter; 6] = [
        TransactionFilter::All,
        TransactionFilter::Reward,
        TransactionFilter::Spend,
        TransactionFilter::Withdraw,
        TransactionFilter::Refund,
        TransactionFilter::Purchase,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransactionFilter::All => "All",
            TransactionFilter::Reward => "Reward",
            TransactionFilter::Spend => "Spend",
            TransactionFilter::Withdraw => "Withdraw",
            TransactionFilter::Refund => "Refund",
            TransactionFilter::Purchase => "Purchase",
        }
    }

    /// Check whether an entry's type matches, ignoring case.
    pub fn matches(&self, entry: &HistoryEntry) -> bool {
        match self {
            TransactionFilter::All => true,
            other => entry.kind.eq_ignore_ascii_case(other.label()),
        }
    }

    /// Keep only the lines this filter matches.
    pub fn apply(&self, lines: &[LedgerLine]) -> Vec<LedgerLine> {
        lines
            .iter()
            .filter(|line| self.matches(&line.entry))
            .cloned()
            .collect()
    }
}

impl std::fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: &str, amount: f64) -> HistoryEntry {
        HistoryEntry {
            kind: kind.to_string(),
            amount,
            status: "success".to_string(),
            ..Default::default()
        }
    }

    fn ledger() -> Vec<WalletTransaction> {
        vec![
            WalletTransaction {
                id: "t1".to_string(),
                user_id: "u1".to_string(),
                history: vec![entry("reward", 50.0), entry("WITHDRAW", 20.0)],
            },
            WalletTransaction {
                id: "t2".to_string(),
                user_id: "u1".to_string(),
                history: vec![entry("withdraw", 5.0), entry("spend", 1.0), entry("Withdrawal", 3.0)],
            },
        ]
    }

    #[test]
    fn flatten_tags_each_entry_with_its_container() {
        let lines = LedgerLine::flatten(&ledger());
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].transaction_id, "t1");
        assert_eq!(lines[2].transaction_id, "t2");
        assert!(lines.iter().all(|l| l.user_id == "u1"));
    }

    #[test]
    fn withdraw_filter_is_case_insensitive_exact_match() {
        let lines = LedgerLine::flatten(&ledger());
        let withdrawals = TransactionFilter::Withdraw.apply(&lines);
        assert_eq!(withdrawals.len(), 2);
        assert!(
            withdrawals
                .iter()
                .all(|l| l.entry.kind.to_lowercase() == "withdraw")
        );
    }

    #[test]
    fn all_filter_keeps_full_history() {
        let lines = LedgerLine::flatten(&ledger());
        assert_eq!(TransactionFilter::All.apply(&lines), lines);
    }
}
