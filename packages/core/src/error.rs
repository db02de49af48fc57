//! Client-side validation errors.

use thiserror::Error;

/// A form could not be submitted as entered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("Please add at least one recipient.")]
    NoRecipients,

    #[error("Notification message is required.")]
    EmptyMessage,
}
