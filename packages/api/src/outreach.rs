//! Outbound email and push notifications.

use admin_core::{EmailRequest, NotificationRequest};

use crate::{Ack, AdminClient, ApiError, Method};

impl AdminClient {
    /// Send the referral template to every recipient.
    pub async fn send_email(&self, email: &EmailRequest) -> Result<Ack, ApiError> {
        let body = serde_json::to_value(email).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = self
            .request(Method::Post, "/adminemail/send")
            .with_json(body);
        let ack = self.authorized(request, "Failed to send email").await?;
        tracing::info!("Email sent to {} recipient(s)", email.to.len());
        Ok(ack)
    }

    pub async fn send_notification(
        &self,
        notification: &NotificationRequest,
    ) -> Result<Ack, ApiError> {
        let body =
            serde_json::to_value(notification).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = self
            .request(Method::Post, "/notification/send")
            .with_json(body);
        let ack = self
            .authorized(request, "Failed to send notifications")
            .await?;
        tracing::info!("Notification dispatched");
        Ok(ack)
    }
}
