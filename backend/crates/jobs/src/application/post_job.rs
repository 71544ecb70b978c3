//! Post Job Use Case
//!
//! Creates a job posting under an existing company.

use std::sync::Arc;

use accounts::domain::repository::CompanyRepository;
use accounts::models::ids::CompanyId;

use crate::domain::entity::job::Job;
use crate::domain::repository::JobRepository;
use crate::domain::value_object::salary_range::SalaryRange;
use crate::error::{JobsError, JobsResult};

/// Post job input
pub struct PostJobInput {
    pub company_id: CompanyId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary_min: i64,
    pub salary_max: i64,
}

/// Post job use case
pub struct PostJobUseCase<P, J>
where
    P: CompanyRepository,
    J: JobRepository,
{
    company_repo: Arc<P>,
    job_repo: Arc<J>,
}

impl<P, J> PostJobUseCase<P, J>
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

    pub async fn execute(&self, input: PostJobInput) -> JobsResult<Job> {
        if !self.company_repo.exists_by_id(&input.company_id).await? {
            return Err(JobsError::CompanyNotFound);
        }

        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(JobsError::Validation("title must not be empty".to_string()));
        }

        let salary = SalaryRange::new(input.salary_min, input.salary_max)
            .map_err(|e| JobsError::Validation(e.to_string()))?;

        let job = Job::new(
            input.company_id,
            title,
            input.description,
            input.location,
            salary,
        );

        self.job_repo.create(&job).await?;

        tracing::info!(
            job_id = %job.job_id,
            company_id = %job.company_id,
            "Job posted"
        );

        Ok(job)
    }
}
