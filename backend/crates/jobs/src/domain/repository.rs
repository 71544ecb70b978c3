//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use accounts::models::ids::{CompanyId, EmployeeId};

use crate::domain::entity::{
    application::{Application, ApplicationSummary},
    job::Job,
};
use crate::domain::value_object::ids::JobId;
use crate::error::JobsResult;

/// Job repository trait
#[trait_variant::make(JobRepository: Send)]
pub trait LocalJobRepository {
    /// Create a new job posting
    async fn create(&self, job: &Job) -> JobsResult<()>;

    /// Find job by ID
    async fn find_by_id(&self, job_id: &JobId) -> JobsResult<Option<Job>>;

    /// Check if a job exists
    async fn exists_by_id(&self, job_id: &JobId) -> JobsResult<bool>;

    /// List jobs posted by a company, newest first
    async fn list_by_company(&self, company_id: &CompanyId) -> JobsResult<Vec<Job>>;
}

/// Application repository trait
#[trait_variant::make(ApplicationRepository: Send)]
pub trait LocalApplicationRepository {
    /// Create a new application record
    async fn create(&self, application: &Application) -> JobsResult<()>;

    /// List an employee's applications joined with job titles
    async fn list_by_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> JobsResult<Vec<ApplicationSummary>>;
}
