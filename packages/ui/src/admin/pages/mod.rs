//! Admin page components for route-based navigation.

mod applicant_status;
mod contact;
mod dashboard;
mod edit_job;
mod job_detail;
mod jobs;
mod login;
mod not_found;
mod post_job;
mod posted_jobs;
mod send_email;
mod send_notification;
mod users;
mod wallet;
mod withdrawals;

pub use applicant_status::ApplicantStatusPage;
pub use contact::ContactPage;
pub use dashboard::DashboardPage;
pub use edit_job::EditJobPage;
pub use job_detail::JobDetailPage;
pub use jobs::JobsPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use post_job::PostJobPage;
pub use posted_jobs::PostedJobsPage;
pub use send_email::SendEmailPage;
pub use send_notification::SendNotificationPage;
pub use users::UsersPage;
pub use wallet::WalletPage;
pub use withdrawals::WithdrawalsPage;
