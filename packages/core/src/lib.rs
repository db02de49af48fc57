//! Core domain types for the referral admin dashboard.
//!
//! This crate contains shared types used across all packages:
//! - Job postings, users, wallets, withdrawals and other backend DTOs
//! - Pagination state for list views
//! - Form helpers (recipient lists, notification drafts, location suggestions)
//! - The admin session and the route guard

mod applicant;
mod contact;
mod display;
mod error;
mod job;
pub mod location;
mod outreach;
mod pagination;
mod reference;
mod session;
mod user;
mod wallet;
mod withdrawal;

pub use applicant::{ApplicantStatus, JobSummary};
pub use contact::ContactMessage;
pub use display::{end_date_input, format_date, format_timestamp, or_dash};
pub use error::ValidationError;
pub use job::{CTC_BANDS, EMPLOYMENT_TYPES, JobPost, JobStatus, WORK_MODES};
pub use location::{Autocomplete, Location};
pub use outreach::{
    EMAIL_TEMPLATE, EmailRequest, NotificationDraft, NotificationRequest, RecipientError,
    RecipientList,
};
pub use pagination::{Paged, PagedList, Pagination};
pub use reference::Populated;
pub use session::{
    Access, Credentials, InvalidationReason, MemoryStore, Session, SessionEvent, SessionStore,
    TOKEN_KEY, USER_ID_KEY, check_access,
};
pub use user::{PresentCompany, User};
pub use wallet::{HistoryEntry, LedgerLine, TransactionFilter, Wallet, WalletTransaction};
pub use withdrawal::{ProcessWithdrawal, Withdrawal, WithdrawalAction, WithdrawalStatus};
