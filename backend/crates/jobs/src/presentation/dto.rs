//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{
    application::{Application, ApplicationSummary},
    job::Job,
};

// ============================================================================
// Jobs
// ============================================================================

/// Job creation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostJobRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub salary_min: i64,
    pub salary_max: i64,
}

/// Job response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub job_id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary_min: i64,
    pub salary_max: i64,
    pub posted_at: DateTime<Utc>,
}

impl From<&Job> for JobResponse {
    fn from(job: &Job) -> Self {
        Self {
            job_id: job.job_id.into_uuid(),
            company_id: job.company_id.into_uuid(),
            title: job.title.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
            salary_min: job.salary.min(),
            salary_max: job.salary.max(),
            posted_at: job.posted_at,
        }
    }
}

// ============================================================================
// Applications
// ============================================================================

/// Application response (submission result)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub application_id: Uuid,
    pub employee_id: Uuid,
    pub job_id: Uuid,
    pub document_path: String,
    pub applied_at: DateTime<Utc>,
}

impl From<&Application> for ApplicationResponse {
    fn from(application: &Application) -> Self {
        Self {
            application_id: application.application_id.into_uuid(),
            employee_id: application.employee_id.into_uuid(),
            job_id: application.job_id.into_uuid(),
            document_path: application.document_path.clone(),
            applied_at: application.applied_at,
        }
    }
}

/// Application list item, joined with the job title
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummaryResponse {
    pub application_id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub document_path: String,
    pub applied_at: DateTime<Utc>,
}

impl From<&ApplicationSummary> for ApplicationSummaryResponse {
    fn from(summary: &ApplicationSummary) -> Self {
        Self {
            application_id: summary.application_id.into_uuid(),
            job_id: summary.job_id.into_uuid(),
            job_title: summary.job_title.clone(),
            document_path: summary.document_path.clone(),
            applied_at: summary.applied_at,
        }
    }
}
