//! Job and admission listing records.
//!
//! These are the two record shapes the board stores. Field names serialize in
//! camelCase (`datePosted`, `lastDate`, `type`) so collections written by
//! earlier versions of the board stay readable. Every text field is free-form
//! and defaults to empty when missing from stored data: nothing here validates
//! presence or format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a job posting.
///
/// The three well-known categories get their own variants; anything else typed
/// into stored data round-trips through [`JobType::Other`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    Government,
    Private,
    Education,
    Other(String),
}

impl JobType {
    /// The categories offered by the type filter and the post form.
    pub const KNOWN: [Self; 3] = [Self::Government, Self::Private, Self::Education];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Government => "Government",
            Self::Private => "Private",
            Self::Education => "Education",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for JobType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Government" => Self::Government,
            "Private" => Self::Private,
            "Education" => Self::Education,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for JobType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<JobType> for String {
    fn from(value: JobType) -> Self {
        match value {
            JobType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job posting.
///
/// `job_type` is optional: postings created before the post form offered a
/// type selector carry none, and those only show up under the `All` filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub organization: String,

    #[serde(default)]
    pub location: String,

    /// Free-form salary range, e.g. `"40,000 - 60,000"`.
    #[serde(default)]
    pub salary: String,

    /// ISO date (`YYYY-MM-DD`) the posting was published.
    #[serde(default)]
    pub date_posted: String,

    #[serde(default)]
    pub details: String,
}

impl Job {
    /// Text the free-text search runs against.
    ///
    /// Title, organization and location are concatenated with no separator,
    /// so a query can match across the boundary of two fields.
    #[must_use]
    pub fn search_haystack(&self) -> String {
        format!("{}{}{}", self.title, self.organization, self.location)
    }

    /// Type label for display, empty when the job has no type.
    #[must_use]
    pub fn type_label(&self) -> &str {
        self.job_type.as_ref().map_or("", JobType::as_str)
    }
}

/// A university admission notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admission {
    pub id: i64,

    #[serde(default)]
    pub program: String,

    #[serde(default)]
    pub university: String,

    #[serde(default)]
    pub campus: String,

    /// Free-form term label, e.g. `"Fall 2025"`.
    #[serde(default)]
    pub intake: String,

    /// Application deadline as written by the poster.
    #[serde(default)]
    pub last_date: String,

    #[serde(default)]
    pub details: String,
}

/// A freshly built record of either kind, produced by the post form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Job(Job),
    Admission(Admission),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_reads_camel_case_fields() {
        let json = r#"{
            "id": 1724112000000,
            "type": "Government",
            "title": "Assistant",
            "organization": "PPSC",
            "location": "Lahore",
            "salary": "40,000 - 60,000",
            "datePosted": "2025-08-20",
            "details": "Apply online."
        }"#;

        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, 1_724_112_000_000);
        assert_eq!(job.job_type, Some(JobType::Government));
        assert_eq!(job.date_posted, "2025-08-20");
    }

    #[test]
    fn test_job_tolerates_missing_fields() {
        let job: Job = serde_json::from_str(r#"{"id": 7, "title": "Clerk"}"#).unwrap();
        assert_eq!(job.title, "Clerk");
        assert!(job.job_type.is_none());
        assert!(job.organization.is_empty());
        assert!(job.salary.is_empty());
    }

    #[test]
    fn test_untyped_job_omits_type_key() {
        let job = Job {
            id: 3,
            job_type: None,
            title: "Driver".to_string(),
            organization: String::new(),
            location: String::new(),
            salary: String::new(),
            date_posted: String::new(),
            details: String::new(),
        };

        let json = serde_json::to_string(&job).unwrap();
        assert!(!json.contains("\"type\""));
        assert!(json.contains("\"datePosted\""));
    }

    #[test]
    fn test_free_text_job_type_is_preserved() {
        let job: Job = serde_json::from_str(r#"{"id": 9, "type": "Contract"}"#).unwrap();
        assert_eq!(job.job_type, Some(JobType::Other("Contract".to_string())));

        let json = serde_json::to_string(&job).unwrap();
        assert!(json.contains(r#""type":"Contract""#));
    }

    #[test]
    fn test_admission_reads_last_date() {
        let admission: Admission =
            serde_json::from_str(r#"{"id": 1, "program": "BS CS", "lastDate": "2025-10-01"}"#)
                .unwrap();
        assert_eq!(admission.program, "BS CS");
        assert_eq!(admission.last_date, "2025-10-01");
        assert!(admission.campus.is_empty());
    }

    #[test]
    fn test_search_haystack_has_no_separator() {
        let job: Job = serde_json::from_str(
            r#"{"id": 1, "title": "Dev", "organization": "Acme", "location": "Remote"}"#,
        )
        .unwrap();
        assert_eq!(job.search_haystack(), "DevAcmeRemote");
    }
}
