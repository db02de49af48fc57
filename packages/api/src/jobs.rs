//! Job postings and applicant statuses.

use admin_core::{ApplicantStatus, JobPost, Paged};
use serde::Deserialize;

use crate::{Ack, AdminClient, ApiError, Method};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobDetail {
    #[serde(alias = "job")]
    job_post: JobPost,
}

impl AdminClient {
    /// Fetch one page of job postings.
    pub async fn jobs(&self, page: u32) -> Result<Paged<JobPost>, ApiError> {
        let request = self
            .request(Method::Get, "/adminjob/jobs")
            .with_query("page", page);
        self.authorized(request, "Failed to fetch jobs").await
    }

    /// Fetch a single job posting.
    pub async fn job(&self, id: &str) -> Result<JobPost, ApiError> {
        let request = self.request(Method::Get, &format!("/adminjob/jobdetail/{id}"));
        let detail: JobDetail = self
            .authorized(request, "Failed to fetch job details")
            .await?;
        Ok(detail.job_post)
    }

    /// Save every field of an existing posting.
    pub async fn update_job(&self, job: &JobPost) -> Result<Ack, ApiError> {
        let body = serde_json::to_value(job).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = self
            .request(Method::Put, &format!("/adminjob/jobs/{}", job.id))
            .with_json(body);
        let ack = self.authorized(request, "Failed to update job").await?;
        tracing::info!("Updated job {}", job.id);
        Ok(ack)
    }

    /// Create a posting on behalf of `job.user_id`.
    pub async fn create_job(&self, job: &JobPost) -> Result<Ack, ApiError> {
        let body = serde_json::to_value(job).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = self
            .request(Method::Post, "/adminjob/create-job")
            .with_json(body);
        let ack = self.authorized(request, "Failed to post job").await?;
        tracing::info!("Created job {}", job.job_unique_id);
        Ok(ack)
    }

    /// Every posting made by one user.
    pub async fn jobs_by_user(&self, user_id: &str) -> Result<Vec<JobPost>, ApiError> {
        let request = self.request(Method::Get, &format!("/adminjob/user/{user_id}"));
        let page: Paged<JobPost> = self
            .authorized(request, "Failed to fetch jobs for this user")
            .await?;
        Ok(page.items)
    }

    /// Fetch one page of applicant statuses.
    pub async fn applicant_statuses(&self, page: u32) -> Result<Paged<ApplicantStatus>, ApiError> {
        let request = self
            .request(Method::Get, "/adminjob/applicant-statuses")
            .with_query("page", page);
        self.authorized(request, "Failed to fetch applicant statuses")
            .await
    }
}
