//! Application Entity
//!
//! Binds one employee to one job with a stored document. An application
//! may not exist referencing a missing employee or job, and may not exist
//! without its document; both are enforced by the submission workflow,
//! not by the schema alone, because the document write is a side effect
//! the database cannot roll back.

use chrono::{DateTime, Utc};

use accounts::models::ids::EmployeeId;

use crate::domain::value_object::ids::{ApplicationId, JobId};

/// Job application entity
#[derive(Debug, Clone)]
pub struct Application {
    /// Application identifier
    pub application_id: ApplicationId,
    /// Applying employee
    pub employee_id: EmployeeId,
    /// Applied-to job
    pub job_id: JobId,
    /// Stored document handle (relative to the document store root)
    pub document_path: String,
    /// Applied timestamp
    pub applied_at: DateTime<Utc>,
}

impl Application {
    /// Create a new application record
    pub fn new(employee_id: EmployeeId, job_id: JobId, document_path: String) -> Self {
        Self {
            application_id: ApplicationId::new(),
            employee_id,
            job_id,
            document_path,
            applied_at: Utc::now(),
        }
    }
}

/// Application list item for API responses, joined with the job title
#[derive(Debug, Clone)]
pub struct ApplicationSummary {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub job_title: String,
    pub document_path: String,
    pub applied_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_new() {
        let employee_id = EmployeeId::new();
        let job_id = JobId::new();
        let application =
            Application::new(employee_id, job_id, "abc_resume.pdf".to_string());

        assert_eq!(application.employee_id, employee_id);
        assert_eq!(application.job_id, job_id);
        assert_eq!(application.document_path, "abc_resume.pdf");
    }
}
