//! Per-user wallet balance and ledger.

use admin_core::{LedgerLine, Wallet, WalletTransaction};
use serde::Deserialize;

use crate::{AdminClient, ApiError, Method};

#[derive(Deserialize)]
struct WalletBody {
    #[serde(default)]
    wallet: Wallet,
}

#[derive(Deserialize)]
struct TransactionsBody {
    #[serde(default)]
    transactions: Vec<WalletTransaction>,
}

/// Balance and flattened ledger of one user.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletOverview {
    pub wallet: Wallet,
    pub ledger: Vec<LedgerLine>,
}

impl AdminClient {
    pub async fn wallet(&self, user_id: &str) -> Result<Wallet, ApiError> {
        let request = self.request(Method::Get, &format!("/adminwallet/userwallet/{user_id}"));
        let body: WalletBody = self
            .authorized(request, "Failed to load wallet data")
            .await?;
        Ok(body.wallet)
    }

    pub async fn wallet_transactions(
        &self,
        user_id: &str,
    ) -> Result<Vec<WalletTransaction>, ApiError> {
        let request = self.request(
            Method::Get,
            &format!("/adminwallet/userwallet/{user_id}/transactions"),
        );
        let body: TransactionsBody = self
            .authorized(request, "Failed to load wallet data")
            .await?;
        Ok(body.transactions)
    }

    /// Fetch balance and ledger concurrently. Either failing fails both.
    pub async fn wallet_overview(&self, user_id: &str) -> Result<WalletOverview, ApiError> {
        let (wallet, transactions) = futures_util::try_join!(
            self.wallet(user_id),
            self.wallet_transactions(user_id)
        )?;
        Ok(WalletOverview {
            wallet,
            ledger: LedgerLine::flatten(&transactions),
        })
    }
}
