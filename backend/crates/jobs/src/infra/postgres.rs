//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use accounts::models::ids::{CompanyId, EmployeeId};

use crate::domain::entity::{
    application::{Application, ApplicationSummary},
    job::Job,
};
use crate::domain::repository::{ApplicationRepository, JobRepository};
use crate::domain::value_object::{
    ids::{ApplicationId, JobId},
    salary_range::SalaryRange,
};
use crate::error::JobsResult;

/// PostgreSQL-backed jobs repository
#[derive(Clone)]
pub struct PgJobsRepository {
    pool: PgPool,
}

impl PgJobsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Job Repository Implementation
// ============================================================================

impl JobRepository for PgJobsRepository {
    async fn create(&self, job: &Job) -> JobsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO jobs (
                job_id,
                company_id,
                title,
                description,
                location,
                salary_min,
                salary_max,
                posted_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(job.job_id.as_uuid())
        .bind(job.company_id.as_uuid())
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(job.salary.min())
        .bind(job.salary.max())
        .bind(job.posted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, job_id: &JobId) -> JobsResult<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT
                job_id,
                company_id,
                title,
                description,
                location,
                salary_min,
                salary_max,
                posted_at
            FROM jobs
            WHERE job_id = $1
            "#,
        )
        .bind(job_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_job()))
    }

    async fn exists_by_id(&self, job_id: &JobId) -> JobsResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM jobs WHERE job_id = $1)")
                .bind(job_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn list_by_company(&self, company_id: &CompanyId) -> JobsResult<Vec<Job>> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT
                job_id,
                company_id,
                title,
                description,
                location,
                salary_min,
                salary_max,
                posted_at
            FROM jobs
            WHERE company_id = $1
            ORDER BY posted_at DESC
            "#,
        )
        .bind(company_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_job()).collect())
    }
}

// ============================================================================
// Application Repository Implementation
// ============================================================================

impl ApplicationRepository for PgJobsRepository {
    async fn create(&self, application: &Application) -> JobsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO applications (
                application_id,
                employee_id,
                job_id,
                document_path,
                applied_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(application.application_id.as_uuid())
        .bind(application.employee_id.as_uuid())
        .bind(application.job_id.as_uuid())
        .bind(&application.document_path)
        .bind(application.applied_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> JobsResult<Vec<ApplicationSummary>> {
        let rows = sqlx::query_as::<_, ApplicationSummaryRow>(
            r#"
            SELECT
                a.application_id,
                a.job_id,
                j.title AS job_title,
                a.document_path,
                a.applied_at
            FROM applications a
            JOIN jobs j ON j.job_id = a.job_id
            WHERE a.employee_id = $1
            ORDER BY a.applied_at DESC
            "#,
        )
        .bind(employee_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_summary()).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct JobRow {
    job_id: Uuid,
    company_id: Uuid,
    title: String,
    description: String,
    location: String,
    salary_min: i64,
    salary_max: i64,
    posted_at: DateTime<Utc>,
}

impl JobRow {
    fn into_job(self) -> Job {
        Job {
            job_id: JobId::from_uuid(self.job_id),
            company_id: CompanyId::from_uuid(self.company_id),
            title: self.title,
            description: self.description,
            location: self.location,
            salary: SalaryRange::from_db(self.salary_min, self.salary_max),
            posted_at: self.posted_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ApplicationSummaryRow {
    application_id: Uuid,
    job_id: Uuid,
    job_title: String,
    document_path: String,
    applied_at: DateTime<Utc>,
}

impl ApplicationSummaryRow {
    fn into_summary(self) -> ApplicationSummary {
        ApplicationSummary {
            application_id: ApplicationId::from_uuid(self.application_id),
            job_id: JobId::from_uuid(self.job_id),
            job_title: self.job_title,
            document_path: self.document_path,
            applied_at: self.applied_at,
        }
    }
}
