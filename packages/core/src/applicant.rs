//! Applicant status records: who applied to which posting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Populated, User};

/// The subset of a job posting embedded in an applicant status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobSummary {
    pub job_role: String,
    pub company_name: String,
    pub job_link: String,
    pub user: Option<Populated<User>>,
}

impl JobSummary {
    /// The user who posted the job, when populated.
    pub fn poster(&self) -> Option<&User> {
        self.user.as_ref().and_then(Populated::doc)
    }
}

/// One application and where it stands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicantStatus {
    #[serde(rename = "_id")]
    pub id: String,
    /// The applicant.
    #[serde(rename = "userId")]
    pub applicant: Option<Populated<User>>,
    pub status: String,
    pub applied_at: Option<DateTime<Utc>>,
    #[serde(rename = "jobPostId")]
    pub job: Option<Populated<JobSummary>>,
}

impl ApplicantStatus {
    pub fn applicant(&self) -> Option<&User> {
        self.applicant.as_ref().and_then(Populated::doc)
    }

    pub fn job(&self) -> Option<&JobSummary> {
        self.job.as_ref().and_then(Populated::doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_nested_population() -> Result<(), serde_json::Error> {
        let status: ApplicantStatus = serde_json::from_value(json!({
            "_id": "s1",
            "status": "shortlisted",
            "appliedAt": "2024-04-02T08:30:00Z",
            "userId": { "_id": "u1", "firstName": "Ravi", "email": "ravi@x.in" },
            "jobPostId": {
                "jobRole": "QA",
                "companyName": "Acme",
                "user": { "_id": "u2", "firstName": "Meera" }
            }
        }))?;
        assert_eq!(status.applicant().map(|u| u.email.as_str()), Some("ravi@x.in"));
        let job = status.job().map(|j| j.job_role.as_str());
        assert_eq!(job, Some("QA"));
        assert_eq!(
            status.job().and_then(JobSummary::poster).map(User::full_name),
            Some("Meera".to_string())
        );
        Ok(())
    }
}
