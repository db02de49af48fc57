//! Admin login.

use admin_core::{Credentials, User};
use serde::Deserialize;
use serde_json::json;

use crate::{AdminClient, ApiError, Method};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody {
    #[serde(default)]
    token: String,
    #[serde(default, alias = "_id")]
    user_id: Option<String>,
    #[serde(default)]
    user: Option<User>,
}

impl AdminClient {
    /// Exchange email and password for a token and start the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Credentials, ApiError> {
        let request = self
            .request(Method::Post, &self.config.login_path)
            .with_json(json!({ "email": email, "password": password }));
        let body: LoginBody = self.execute(request, "Login failed").await?;
        if body.token.is_empty() {
            return Err(ApiError::Decode("login response carried no token".to_string()));
        }

        let credentials = Credentials {
            token: body.token,
            user_id: body
                .user_id
                .or_else(|| body.user.map(|u| u.id))
                .filter(|id| !id.is_empty()),
        };
        self.session.sign_in(credentials.clone());
        Ok(credentials)
    }

    /// End the session locally.
    pub fn logout(&self) {
        self.session.logout();
    }
}
