//! HTTP Handlers

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use accounts::domain::repository::{CompanyRepository, EmployeeRepository};
use accounts::models::ids::{CompanyId, EmployeeId};

use crate::application::{
    ApplicationQueries, JobQueries, PostJobInput, PostJobUseCase, SubmitApplicationInput,
    SubmitApplicationUseCase,
};
use crate::domain::document_store::DocumentStore;
use crate::domain::repository::{ApplicationRepository, JobRepository};
use crate::domain::value_object::ids::JobId;
use crate::error::{JobsError, JobsResult};
use crate::presentation::dto::{
    ApplicationResponse, ApplicationSummaryResponse, JobResponse, PostJobRequest,
};

/// Shared state for jobs handlers
#[derive(Clone)]
pub struct JobsState<R, P, D>
where
    R: JobRepository + ApplicationRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
    D: DocumentStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub profiles: Arc<P>,
    pub documents: Arc<D>,
}

// ============================================================================
// Job posting / listing
// ============================================================================

/// POST /companies/{company_id}/jobs
pub async fn post_job<R, P, D>(
    State(state): State<JobsState<R, P, D>>,
    Path(company_id): Path<Uuid>,
    Json(req): Json<PostJobRequest>,
) -> JobsResult<impl IntoResponse>
where
    R: JobRepository + ApplicationRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
    D: DocumentStore + Clone + Send + Sync + 'static,
{
    let use_case = PostJobUseCase::new(state.profiles.clone(), state.repo.clone());

    let job = use_case
        .execute(PostJobInput {
            company_id: CompanyId::from_uuid(company_id),
            title: req.title,
            description: req.description,
            location: req.location,
            salary_min: req.salary_min,
            salary_max: req.salary_max,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(JobResponse::from(&job))))
}

/// GET /companies/{company_id}/jobs
pub async fn list_company_jobs<R, P, D>(
    State(state): State<JobsState<R, P, D>>,
    Path(company_id): Path<Uuid>,
) -> JobsResult<Json<Vec<JobResponse>>>
where
    R: JobRepository + ApplicationRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
    D: DocumentStore + Clone + Send + Sync + 'static,
{
    let queries = JobQueries::new(state.profiles.clone(), state.repo.clone());
    let jobs = queries
        .list_for_company(&CompanyId::from_uuid(company_id))
        .await?;

    Ok(Json(jobs.iter().map(JobResponse::from).collect()))
}

// ============================================================================
// Applications (role Employee required, enforced by the router's gate)
// ============================================================================

/// POST /employees/{employee_id}/apply/{job_id}
pub async fn apply_for_job<R, P, D>(
    State(state): State<JobsState<R, P, D>>,
    Path((employee_id, job_id)): Path<(Uuid, Uuid)>,
    multipart: Multipart,
) -> JobsResult<impl IntoResponse>
where
    R: JobRepository + ApplicationRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
    D: DocumentStore + Clone + Send + Sync + 'static,
{
    let (document_name, document_bytes) = read_document(multipart).await?;

    let use_case = SubmitApplicationUseCase::new(
        state.profiles.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.documents.clone(),
    );

    let application = use_case
        .execute(SubmitApplicationInput {
            employee_id: EmployeeId::from_uuid(employee_id),
            job_id: JobId::from_uuid(job_id),
            document_name,
            document_bytes,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::from(&application)),
    ))
}

/// GET /employees/{employee_id}/applications
pub async fn list_applications<R, P, D>(
    State(state): State<JobsState<R, P, D>>,
    Path(employee_id): Path<Uuid>,
) -> JobsResult<Json<Vec<ApplicationSummaryResponse>>>
where
    R: JobRepository + ApplicationRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
    D: DocumentStore + Clone + Send + Sync + 'static,
{
    let queries = ApplicationQueries::new(state.profiles.clone(), state.repo.clone());
    let summaries = queries
        .list_for_employee(&EmployeeId::from_uuid(employee_id))
        .await?;

    Ok(Json(
        summaries.iter().map(ApplicationSummaryResponse::from).collect(),
    ))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Pull the document out of a multipart body.
///
/// The first file-bearing part (or a part named "document") is taken as
/// the attachment; an absent part surfaces as empty bytes, which the use
/// case rejects as `MissingDocument`.
async fn read_document(mut multipart: Multipart) -> JobsResult<(Option<String>, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| JobsError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.file_name().is_some() || field.name() == Some("document") {
            let name = field.file_name().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| JobsError::Validation(format!("Malformed multipart body: {e}")))?;
            return Ok((name, bytes.to_vec()));
        }
    }

    Ok((None, Vec::new()))
}
