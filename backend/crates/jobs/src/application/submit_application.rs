//! Submit Application Use Case
//!
//! Binds an employee, a job and an uploaded document into a durable
//! application record. Every precondition is checked before the first
//! side effect, and the document write gets a compensating delete when
//! the record insert fails afterwards: no application row without a
//! readable document, no orphaned document after a failed submission.

use std::sync::Arc;

use accounts::domain::repository::EmployeeRepository;
use accounts::models::ids::EmployeeId;

use crate::domain::document_store::DocumentStore;
use crate::domain::entity::application::Application;
use crate::domain::repository::{ApplicationRepository, JobRepository};
use crate::domain::value_object::ids::JobId;
use crate::error::{JobsError, JobsResult};

/// Submit application input
pub struct SubmitApplicationInput {
    pub employee_id: EmployeeId,
    pub job_id: JobId,
    /// Client-supplied filename, advisory only
    pub document_name: Option<String>,
    pub document_bytes: Vec<u8>,
}

/// Submit application use case
pub struct SubmitApplicationUseCase<E, J, A, D>
where
    E: EmployeeRepository,
    J: JobRepository,
    A: ApplicationRepository,
    D: DocumentStore,
{
    employee_repo: Arc<E>,
    job_repo: Arc<J>,
    application_repo: Arc<A>,
    documents: Arc<D>,
}

impl<E, J, A, D> SubmitApplicationUseCase<E, J, A, D>
where
    E: EmployeeRepository,
    J: JobRepository,
    A: ApplicationRepository,
    D: DocumentStore,
{
    pub fn new(
        employee_repo: Arc<E>,
        job_repo: Arc<J>,
        application_repo: Arc<A>,
        documents: Arc<D>,
    ) -> Self {
        Self {
            employee_repo,
            job_repo,
            application_repo,
            documents,
        }
    }

    pub async fn execute(&self, input: SubmitApplicationInput) -> JobsResult<Application> {
        // All referential checks precede the document write, so a failed
        // precondition never leaves anything to clean up.
        if !self.employee_repo.exists_by_id(&input.employee_id).await? {
            return Err(JobsError::EmployeeNotFound);
        }

        if !self.job_repo.exists_by_id(&input.job_id).await? {
            return Err(JobsError::JobNotFound);
        }

        if input.document_bytes.is_empty() {
            return Err(JobsError::MissingDocument);
        }

        let stored = self
            .documents
            .save(input.document_name.as_deref(), &input.document_bytes)
            .await?;

        let application = Application::new(input.employee_id, input.job_id, stored.path.clone());

        if let Err(e) = self.application_repo.create(&application).await {
            // Compensating delete; the record is the source of truth, so
            // a file without a record must not outlive this request.
            if let Err(cleanup) = self.documents.delete(&stored.path).await {
                tracing::warn!(
                    path = %stored.path,
                    error = %cleanup,
                    "Failed to clean up document after record insert failure"
                );
            }
            return Err(e);
        }

        tracing::info!(
            application_id = %application.application_id,
            employee_id = %application.employee_id,
            job_id = %application.job_id,
            "Application submitted"
        );

        Ok(application)
    }
}
