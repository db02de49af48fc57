//! Outbound email and push-notification requests.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::ValidationError;

/// The only template the send-email form dispatches.
pub const EMAIL_TEMPLATE: &str = "share_referral.html";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map_err(|e| tracing::error!("Email pattern failed to compile: {e}"))
        .ok()
});

fn looks_like_email(s: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(s))
}

/// Why a recipient was not added.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipientError {
    #[error("Email is empty.")]
    Empty,

    #[error("Invalid email format.")]
    InvalidFormat,

    #[error("Email already added.")]
    Duplicate,
}

impl RecipientError {
    /// Duplicates are warnings; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, RecipientError::Duplicate)
    }
}

/// The ordered, duplicate-free recipient list of the send-email form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientList {
    emails: Vec<String>,
}

impl RecipientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append an email. The input is trimmed first.
    pub fn add(&mut self, input: &str) -> Result<(), RecipientError> {
        let email = input.trim();
        if email.is_empty() {
            return Err(RecipientError::Empty);
        }
        if !looks_like_email(email) {
            return Err(RecipientError::InvalidFormat);
        }
        if self.emails.iter().any(|e| e == email) {
            return Err(RecipientError::Duplicate);
        }
        self.emails.push(email.to_string());
        Ok(())
    }

    pub fn remove(&mut self, email: &str) {
        self.emails.retain(|e| e != email);
    }

    pub fn clear(&mut self) {
        self.emails.clear();
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// Build the dispatch request for the current recipients.
    pub fn to_request(&self, subject: &str) -> Result<EmailRequest, ValidationError> {
        if self.emails.is_empty() {
            return Err(ValidationError::NoRecipients);
        }
        Ok(EmailRequest {
            to: self.emails.clone(),
            subject: subject.to_string(),
            template_name: EMAIL_TEMPLATE.to_string(),
            replacements: Map::new(),
        })
    }
}

/// Body of the templated email dispatch request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub to: Vec<String>,
    pub subject: String,
    pub template_name: String,
    pub replacements: Map<String, Value>,
}

/// Body of the push-notification dispatch request.
///
/// A missing `user_ids` means "every user".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<String>>,
}

/// Raw input of the send-notification form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationDraft {
    pub message: String,
    pub post_id: String,
    /// Comma-separated user ids.
    pub user_ids: String,
}

impl NotificationDraft {
    /// Whether the submit button should be enabled.
    pub fn is_sendable(&self) -> bool {
        !self.message.trim().is_empty()
    }

    /// Parse the comma-separated id field, dropping blanks.
    pub fn parsed_user_ids(&self) -> Vec<String> {
        self.user_ids
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn to_request(&self) -> Result<NotificationRequest, ValidationError> {
        if !self.is_sendable() {
            return Err(ValidationError::EmptyMessage);
        }
        let post_id = Some(self.post_id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        let user_ids = Some(self.parsed_user_ids()).filter(|ids| !ids.is_empty());
        Ok(NotificationRequest {
            message: self.message.clone(),
            post_id,
            user_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL_RE.is_some());
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a b@c.io"));
    }

    #[test]
    fn rejects_malformed_and_accepts_valid_once() {
        let mut list = RecipientList::new();
        assert_eq!(list.add("not-an-email"), Err(RecipientError::InvalidFormat));
        assert!(list.is_empty());

        assert_eq!(list.add("a@b.com"), Ok(()));
        assert_eq!(list.emails(), ["a@b.com".to_string()]);
    }

    #[test]
    fn duplicate_is_a_warning_and_leaves_list_unchanged() {
        let mut list = RecipientList::new();
        list.add("a@b.com").ok();
        let err = list.add("  a@b.com ");
        assert_eq!(err, Err(RecipientError::Duplicate));
        assert!(err.err().is_some_and(|e| e.is_warning()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut list = RecipientList::new();
        assert_eq!(list.add("   "), Err(RecipientError::Empty));
        assert!(list.is_empty());
    }

    #[test]
    fn remove_and_request() -> Result<(), ValidationError> {
        let mut list = RecipientList::new();
        assert_eq!(list.to_request("Hi"), Err(ValidationError::NoRecipients));
        list.add("a@b.com").ok();
        list.add("c@d.org").ok();
        list.remove("a@b.com");
        let req = list.to_request("Refer a friend")?;
        assert_eq!(req.to, vec!["c@d.org".to_string()]);
        assert_eq!(req.template_name, EMAIL_TEMPLATE);
        assert!(req.replacements.is_empty());
        Ok(())
    }

    #[test]
    fn notification_omits_blank_optionals() -> Result<(), Box<dyn std::error::Error>> {
        let draft = NotificationDraft {
            message: "New jobs posted".to_string(),
            post_id: "   ".to_string(),
            user_ids: " , ,".to_string(),
        };
        let body = serde_json::to_value(draft.to_request()?)?;
        assert_eq!(body, json!({ "message": "New jobs posted" }));
        Ok(())
    }

    #[test]
    fn notification_parses_targets() -> Result<(), ValidationError> {
        let draft = NotificationDraft {
            message: "Ping".to_string(),
            post_id: " p1 ".to_string(),
            user_ids: "u1, u2 ,,u3".to_string(),
        };
        let req = draft.to_request()?;
        assert_eq!(req.post_id.as_deref(), Some("p1"));
        assert_eq!(
            req.user_ids,
            Some(vec!["u1".to_string(), "u2".to_string(), "u3".to_string()])
        );
        Ok(())
    }

    #[test]
    fn notification_requires_message() {
        let draft = NotificationDraft {
            message: "  ".to_string(),
            ..Default::default()
        };
        assert!(!draft.is_sendable());
        assert_eq!(draft.to_request(), Err(ValidationError::EmptyMessage));
    }
}
