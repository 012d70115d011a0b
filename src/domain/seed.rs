//! Sample listings shown until the board has durable data of its own.

use super::listing::{Admission, Job, JobType};

/// Jobs used when the jobs slot is absent or unreadable.
#[must_use]
pub fn sample_jobs() -> Vec<Job> {
    vec![
        Job {
            id: 1,
            job_type: Some(JobType::Government),
            title: "Assistant (PPSC)".to_string(),
            organization: "Punjab Public Service Commission".to_string(),
            location: "Lahore".to_string(),
            salary: "40,000 - 60,000".to_string(),
            date_posted: "2025-08-20".to_string(),
            details: "Apply online at PPSC. Eligibility: BA/BSc. Last date: 2025-09-10.".to_string(),
        },
        Job {
            id: 2,
            job_type: Some(JobType::Private),
            title: "Software Developer".to_string(),
            organization: "Tech Solutions Pvt Ltd".to_string(),
            location: "Remote".to_string(),
            salary: "60,000 - 120,000".to_string(),
            date_posted: "2025-08-28".to_string(),
            details: "Full stack developer. Experience: 1-3 years.".to_string(),
        },
    ]
}

/// Admissions used when the admissions slot is absent or unreadable.
#[must_use]
pub fn sample_admissions() -> Vec<Admission> {
    vec![Admission {
        id: 1,
        program: "BS Computer Science".to_string(),
        university: "National University".to_string(),
        campus: "Main Campus".to_string(),
        intake: "Fall 2025".to_string(),
        last_date: "2025-10-01".to_string(),
        details: "Merit-based admissions. Apply online.".to_string(),
    }]
}
