//! Contact form submissions.

use admin_core::{ContactMessage, Paged};

use crate::{AdminClient, ApiError, Method};

impl AdminClient {
    pub async fn contact_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
        let request = self.request(Method::Get, "/contact/getmsg");
        let page: Paged<ContactMessage> = self
            .authorized(request, "Failed to fetch messages")
            .await?;
        Ok(page.items)
    }
}
