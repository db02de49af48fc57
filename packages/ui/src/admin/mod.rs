//! Admin dashboard components for the referral platform.

mod error_banner;
mod job_fields;
mod location_input;
mod paged;
mod pagination;
mod pages;
mod rich_text_editor;
mod status_badge;

pub use error_banner::{ErrorBanner, Notice, Tone};
pub use job_fields::JobFields;
pub use location_input::LocationInput;
pub use paged::{PagedView, use_paged_list};
pub use pages::*;
pub use pagination::PaginationControls;
pub use rich_text_editor::RichTextEditor;
pub use status_badge::StatusBadge;
