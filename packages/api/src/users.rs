//! Registered users.

use admin_core::{Paged, User};

use crate::{AdminClient, ApiError, Method};

impl AdminClient {
    /// Fetch one page of users.
    pub async fn users(&self, page: u32) -> Result<Paged<User>, ApiError> {
        let request = self
            .request(Method::Get, "/adminuser/users")
            .with_query("page", page);
        self.authorized(request, "Failed to fetch users").await
    }
}
