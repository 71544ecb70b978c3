//! Job Entity
//!
//! A posting owned by exactly one company. The owner reference is set at
//! creation and never changes.

use chrono::{DateTime, Utc};

use accounts::models::ids::CompanyId;

use crate::domain::value_object::{ids::JobId, salary_range::SalaryRange};

/// Job posting entity
#[derive(Debug, Clone)]
pub struct Job {
    /// Job identifier
    pub job_id: JobId,
    /// Owning company, immutable after creation
    pub company_id: CompanyId,
    /// Posting title
    pub title: String,
    /// Full description
    pub description: String,
    /// Location label
    pub location: String,
    /// Salary range
    pub salary: SalaryRange,
    /// Posted timestamp
    pub posted_at: DateTime<Utc>,
}

impl Job {
    /// Create a new job posting
    pub fn new(
        company_id: CompanyId,
        title: String,
        description: String,
        location: String,
        salary: SalaryRange,
    ) -> Self {
        Self {
            job_id: JobId::new(),
            company_id,
            title,
            description,
            location,
            salary,
            posted_at: Utc::now(),
        }
    }
}
