//! Job Query Service
//!
//! Read-side operations over job postings.

use std::sync::Arc;

use accounts::domain::repository::CompanyRepository;
use accounts::models::ids::CompanyId;

use crate::domain::entity::job::Job;
use crate::domain::repository::JobRepository;
use crate::error::{JobsError, JobsResult};

/// Job queries
pub struct JobQueries<P, J>
where
    P: CompanyRepository,
    J: JobRepository,
{
    company_repo: Arc<P>,
    job_repo: Arc<J>,
}

impl<P, J> JobQueries<P, J>
where
    P: CompanyRepository,
    J: JobRepository,
{
    pub fn new(company_repo: Arc<P>, job_repo: Arc<J>) -> Self {
        Self {
            company_repo,
            job_repo,
        }
    }

    /// List a company's job postings
    pub async fn list_for_company(&self, company_id: &CompanyId) -> JobsResult<Vec<Job>> {
        if !self.company_repo.exists_by_id(company_id).await? {
            return Err(JobsError::CompanyNotFound);
        }

        self.job_repo.list_by_company(company_id).await
    }
}
