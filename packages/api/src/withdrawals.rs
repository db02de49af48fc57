//! Withdrawal requests and their approval.

use admin_core::{Paged, ProcessWithdrawal, Withdrawal};

use crate::{Ack, AdminClient, ApiError, Method};

impl AdminClient {
    pub async fn withdrawals(&self) -> Result<Vec<Withdrawal>, ApiError> {
        let request = self.request(Method::Get, "/adminwallet/userwithdrawals");
        let page: Paged<Withdrawal> = self
            .authorized(request, "Failed to fetch withdrawals")
            .await?;
        Ok(page.items)
    }

    /// Approve or reject a pending withdrawal.
    pub async fn process_withdrawal(&self, process: &ProcessWithdrawal) -> Result<Ack, ApiError> {
        let body = serde_json::to_value(process).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = self
            .request(Method::Post, "/adminwallet/userwithdraw/process")
            .with_json(body);
        let ack = self
            .authorized(request, "Error processing withdrawal")
            .await?;
        tracing::info!(
            "Withdrawal {} {}",
            process.transaction_id,
            process.action.past_tense()
        );
        Ok(ack)
    }
}
