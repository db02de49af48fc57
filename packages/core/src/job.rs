//! Job posting types for referral listings.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{Populated, User, ValidationError};

/// Employment type options as `(wire value, label)`.
pub const EMPLOYMENT_TYPES: &[(&str, &str)] = &[
    ("full-time", "Full-Time"),
    ("part-time", "Part-Time"),
    ("contract", "Contract"),
    ("internship", "Internship"),
];

/// Work mode options as `(wire value, label)`.
pub const WORK_MODES: &[(&str, &str)] = &[
    ("remote", "Remote"),
    ("onsite", "Onsite"),
    ("hybrid", "Hybrid"),
];

/// Compensation bands offered by the job forms.
pub const CTC_BANDS: &[&str] = &[
    "3-5 LPA",
    "5-8 LPA",
    "8-12 LPA",
    "12-15 LPA",
    "15-20 LPA",
    "20-25 LPA",
    "25+ LPA",
];

/// Whether a posting is visible to applicants.
///
/// Statuses the dashboard does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    #[default]
    Active,
    Inactive,
    Other(String),
}

impl JobStatus {
    /// The statuses offered by the edit form.
    pub const ALL: [JobStatus; 2] = [JobStatus::Active, JobStatus::Inactive];

    /// Get the wire string for this status.
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Inactive => "inactive",
            JobStatus::Other(s) => s,
        }
    }

    /// Parse a status from its wire string. Blank means active.
    pub fn parse(s: &str) -> Self {
        match s {
            "" | "active" => JobStatus::Active,
            "inactive" => JobStatus::Inactive,
            other => JobStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job posting as stored by the backend.
///
/// Fields the dashboard does not know about are kept in `extra` so that an
/// edit round trip sends them back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPost {
    /// Backend identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// The user who posted the job, populated or as a bare id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Populated<User>>,
    /// Owning user id, only sent when creating a job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub job_role: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_logo_url: String,
    /// Human-facing job identifier chosen by the poster.
    #[serde(default)]
    pub job_unique_id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub employment_type: String,
    /// Compensation band, one of [`CTC_BANDS`].
    #[serde(default)]
    pub ctc: String,
    /// Years of experience required.
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub experience_required: Option<u32>,
    #[serde(default)]
    pub work_mode: String,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub no_of_referrals: Option<u32>,
    /// End date as sent by the backend (ISO 8601 date or timestamp).
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub job_link: String,
    /// Sanitized HTML description.
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobPost {
    /// Create a blank posting on behalf of `user`, prefilled from their
    /// present company.
    pub fn draft_for(user: &User) -> Self {
        let company = user.present_company.clone().unwrap_or_default();
        Self {
            user_id: Some(user.id.clone()),
            company_name: company.company_name,
            company_logo_url: company.company_logo_url,
            employment_type: "full-time".to_string(),
            work_mode: "remote".to_string(),
            no_of_referrals: Some(1),
            ..Default::default()
        }
    }

    /// Email of the posting user, when the reference is populated.
    pub fn posted_by_email(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(Populated::doc)
            .map(|u| u.email.as_str())
            .filter(|e| !e.is_empty())
    }

    /// Check the fields a new posting cannot be submitted without.
    pub fn validate_for_create(&self) -> Result<(), ValidationError> {
        let required: [(&'static str, bool); 4] = [
            ("Job role", self.job_role.trim().is_empty()),
            ("Job unique ID", self.job_unique_id.trim().is_empty()),
            ("End date", self.end_date.trim().is_empty()),
            ("Job link", self.job_link.trim().is_empty()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, missing)| *missing) {
            return Err(ValidationError::MissingField(*field));
        }
        if self.experience_required.is_none() {
            return Err(ValidationError::MissingField("Experience required"));
        }
        if self.no_of_referrals.is_none() {
            return Err(ValidationError::MissingField("Number of referrals"));
        }
        Ok(())
    }
}

/// Accept counts sent either as JSON numbers or as numeric strings, which is
/// what HTML number inputs produce.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Int(n)) => u32::try_from(n).map(Some).map_err(serde::de::Error::custom),
        Some(Raw::Float(f)) if (0.0..=f64::from(u32::MAX)).contains(&f) => {
            Ok(Some(f.trunc() as u32))
        }
        Some(Raw::Float(f)) => Err(serde::de::Error::custom(format!("count out of range: {f}"))),
        Some(Raw::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse().map(Some).map_err(serde::de::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use crate::{Paged, PresentCompany};
    use serde_json::json;

    #[test]
    fn decodes_populated_job_and_keeps_unknown_fields() -> Result<(), serde_json::Error> {
        let raw = json!({
            "_id": "665f",
            "jobRole": "Backend Engineer",
            "companyName": "Acme",
            "experienceRequired": "3",
            "noOfReferrals": 2,
            "status": "inactive",
            "user": { "_id": "u1", "email": "poster@acme.io" },
            "createdAt": "2024-05-01T10:00:00.000Z"
        });
        let job: JobPost = serde_json::from_value(raw)?;
        assert_eq!(job.id, "665f");
        assert_eq!(job.experience_required, Some(3));
        assert_eq!(job.no_of_referrals, Some(2));
        assert_eq!(job.status, JobStatus::Inactive);
        assert_eq!(job.posted_by_email(), Some("poster@acme.io"));
        assert!(job.extra.contains_key("createdAt"));

        let back = serde_json::to_value(&job)?;
        assert_eq!(back["createdAt"], "2024-05-01T10:00:00.000Z");
        assert_eq!(back["experienceRequired"], 3);
        Ok(())
    }

    #[test]
    fn unknown_status_does_not_sink_the_page() -> Result<(), serde_json::Error> {
        let page: Paged<JobPost> = serde_json::from_value(json!({
            "jobPosts": [
                { "_id": "1", "status": "active" },
                { "_id": "2", "status": "closed" }
            ],
            "currentPage": 1,
            "totalPages": 1
        }))?;
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].status, JobStatus::Active);
        assert_eq!(page.items[1].status, JobStatus::Other("closed".to_string()));
        assert_eq!(page.items[1].status.to_string(), "closed");

        let back = serde_json::to_value(&page.items[1])?;
        assert_eq!(back["status"], "closed");
        Ok(())
    }

    #[test]
    fn bare_user_id_reference_is_accepted() -> Result<(), serde_json::Error> {
        let job: JobPost = serde_json::from_value(json!({ "_id": "1", "user": "u42" }))?;
        assert_eq!(job.user, Some(Populated::Id("u42".to_string())));
        assert_eq!(job.posted_by_email(), None);
        Ok(())
    }

    #[test]
    fn draft_prefills_from_user() {
        let user = User {
            id: "u1".to_string(),
            present_company: Some(PresentCompany {
                company_name: "Acme".to_string(),
                company_logo_url: "https://acme.io/logo.png".to_string(),
                role: "Lead".to_string(),
            }),
            ..Default::default()
        };
        let draft = JobPost::draft_for(&user);
        assert_eq!(draft.user_id.as_deref(), Some("u1"));
        assert_eq!(draft.company_name, "Acme");
        assert_eq!(draft.work_mode, "remote");
        assert_eq!(draft.employment_type, "full-time");
        assert_eq!(draft.no_of_referrals, Some(1));
        assert_eq!(draft.status, JobStatus::Active);
    }

    #[test]
    fn create_validation_reports_first_missing_field() {
        let mut job = JobPost::draft_for(&User::default());
        assert_eq!(
            job.validate_for_create(),
            Err(ValidationError::MissingField("Job role"))
        );

        job.job_role = "SRE".to_string();
        job.job_unique_id = "SRE-1".to_string();
        job.end_date = "2030-01-01".to_string();
        job.job_link = "https://acme.io/jobs/1".to_string();
        assert_eq!(
            job.validate_for_create(),
            Err(ValidationError::MissingField("Experience required"))
        );

        job.experience_required = Some(2);
        assert_eq!(job.validate_for_create(), Ok(()));
    }
}
