//! REST client for the referral admin backend.
//!
//! This crate contains a typed call for every admin endpoint:
//! - Jobs and applicant statuses (list, detail, create, update)
//! - Users, wallets and withdrawals
//! - Contact messages, email and notification dispatch
//! - Admin login
//!
//! Requests go through a [`Transport`]; [`HttpTransport`] is the real one.
//! Every authenticated call reads the token from the shared [`Session`] and
//! a 401 response ends that session.

use std::rc::Rc;

use admin_core::{InvalidationReason, Session};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

mod auth;
mod config;
mod contact;
mod jobs;
mod outreach;
mod transport;
mod users;
mod wallet;
mod withdrawals;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_LOGIN_PATH};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport, TransportFuture};
pub use wallet::WalletOverview;

// Re-export core types for convenience
pub use admin_core::{
    ApplicantStatus, ContactMessage, Credentials, EmailRequest, JobPost, NotificationRequest,
    Paged, ProcessWithdrawal, User, Wallet, WalletTransaction, Withdrawal,
};

/// Errors from backend calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("You are not signed in.")]
    MissingToken,
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the view: backend messages and session problems verbatim,
    /// `fallback` for anything lower level.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Unauthorized | ApiError::MissingToken => self.to_string(),
            ApiError::Transport(_) | ApiError::Decode(_) => fallback.to_string(),
        }
    }
}

/// Acknowledgement body of a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Ack {
    pub message: Option<String>,
}

impl Ack {
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Pull a human message out of an error body: `message`, then `error`.
fn backend_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key)?.as_str().map(str::to_string))
        .filter(|m| !m.is_empty())
}

/// Typed access to the admin backend.
///
/// Cheap to clone; clones share the transport and session.
#[derive(Clone)]
pub struct AdminClient {
    config: ClientConfig,
    transport: Rc<dyn Transport>,
    session: Session,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish()
    }
}

impl PartialEq for AdminClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && Rc::ptr_eq(&self.transport, &other.transport)
            && self.session == other.session
    }
}

impl AdminClient {
    pub fn new(config: ClientConfig, transport: impl Transport + 'static, session: Session) -> Self {
        Self {
            config,
            transport: Rc::new(transport),
            session,
        }
    }

    /// A client talking HTTP to `config.base_url`.
    pub fn http(config: ClientConfig, session: Session) -> Self {
        Self::new(config, HttpTransport::new(), session)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, self.config.url(path))
    }

    /// Send with the session's bearer token and decode a success body.
    ///
    /// `fallback` is the message used when an error body carries none.
    async fn authorized<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let token = self.session.token().ok_or(ApiError::MissingToken)?;
        self.execute(request.with_bearer(token), fallback).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let authenticated = request.bearer.is_some();

        let response = self.transport.send(request).await.inspect_err(|e| {
            tracing::warn!("{method} {url} failed: {e}");
        })?;

        if response.status == 401 && authenticated {
            tracing::warn!("{method} {url} rejected the session token");
            self.session.invalidate(InvalidationReason::Rejected);
            return Err(ApiError::Unauthorized);
        }
        if !response.is_success() {
            let message =
                backend_message(&response.body).unwrap_or_else(|| fallback.to_string());
            tracing::warn!("{method} {url} returned {}: {message}", response.status);
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        let body = if response.body.trim().is_empty() {
            "{}"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(body).map_err(|e| {
            tracing::warn!("{method} {url} returned an unreadable body: {e}");
            ApiError::Decode(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_prefers_message_then_error() {
        assert_eq!(
            backend_message(r#"{"message":"Job not found","error":"x"}"#).as_deref(),
            Some("Job not found")
        );
        assert_eq!(
            backend_message(r#"{"error":"userIds must be an array"}"#).as_deref(),
            Some("userIds must be an array")
        );
        assert_eq!(backend_message(r#"{"message":""}"#), None);
        assert_eq!(backend_message("<html>502</html>"), None);
    }

    #[test]
    fn view_messages_hide_low_level_errors() {
        let decode = ApiError::Decode("expected value".to_string());
        assert_eq!(decode.message_or("Failed to fetch users"), "Failed to fetch users");

        let status = ApiError::Status {
            status: 404,
            message: "Job not found".to_string(),
        };
        assert_eq!(status.message_or("Failed to fetch job"), "Job not found");
        assert_eq!(
            ApiError::Unauthorized.message_or("ignored"),
            "Your session has expired. Please sign in again."
        );
    }

    #[test]
    fn ack_falls_back_when_message_missing() {
        assert_eq!(Ack::default().message_or("Done"), "Done");
        let ack = Ack {
            message: Some("Sent".to_string()),
        };
        assert_eq!(ack.message_or("Done"), "Sent");
    }
}
