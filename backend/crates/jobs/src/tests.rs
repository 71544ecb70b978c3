//! Unit tests for the jobs use cases
//!
//! Runs the posting and application workflows against in-memory doubles.
//! The document-store double records every save/delete so the
//! no-orphan-file invariant can be asserted directly.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use accounts::domain::repository::{CompanyRepository, EmployeeRepository, IdentityRepository};
use accounts::error::AccountResult;
use accounts::models::ids::{CompanyId, EmployeeId};

use crate::application::{
    ApplicationQueries, JobQueries, PostJobInput, PostJobUseCase, SubmitApplicationInput,
    SubmitApplicationUseCase,
};
use crate::domain::document_store::{DocumentStore, StoredDocument};
use crate::domain::entity::{
    application::{Application, ApplicationSummary},
    job::Job,
};
use crate::domain::repository::{ApplicationRepository, JobRepository};
use crate::domain::value_object::{ids::JobId, salary_range::SalaryRange};
use crate::error::{JobsError, JobsResult};

// ============================================================================
// Profile double (accounts-side existence checks)
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryProfiles {
    companies: Arc<Mutex<HashSet<Uuid>>>,
    employees: Arc<Mutex<HashSet<Uuid>>>,
}

impl InMemoryProfiles {
    fn with_company(self, company_id: &CompanyId) -> Self {
        self.companies.lock().unwrap().insert(company_id.into_uuid());
        self
    }

    fn with_employee(self, employee_id: &EmployeeId) -> Self {
        self.employees.lock().unwrap().insert(employee_id.into_uuid());
        self
    }
}

impl IdentityRepository for InMemoryProfiles {
    async fn find_by_email(
        &self,
        _email: &accounts::models::email::Email,
    ) -> AccountResult<Option<accounts::models::identity::Identity>> {
        Ok(None)
    }
}

impl CompanyRepository for InMemoryProfiles {
    async fn create_with_identity(
        &self,
        _identity: &accounts::models::identity::Identity,
        _company: &accounts::models::company::Company,
    ) -> AccountResult<()> {
        Ok(())
    }

    async fn find_by_id(
        &self,
        _company_id: &CompanyId,
    ) -> AccountResult<Option<accounts::models::company::Company>> {
        Ok(None)
    }

    async fn find_by_email(
        &self,
        _email: &accounts::models::email::Email,
    ) -> AccountResult<Option<accounts::models::company::Company>> {
        Ok(None)
    }

    async fn list(&self) -> AccountResult<Vec<accounts::models::company::Company>> {
        Ok(Vec::new())
    }

    async fn list_by_industry(
        &self,
        _industry: &str,
    ) -> AccountResult<Vec<accounts::models::company::Company>> {
        Ok(Vec::new())
    }

    async fn exists_by_id(&self, company_id: &CompanyId) -> AccountResult<bool> {
        Ok(self
            .companies
            .lock()
            .unwrap()
            .contains(&company_id.into_uuid()))
    }
}

impl EmployeeRepository for InMemoryProfiles {
    async fn create_with_identity(
        &self,
        _identity: &accounts::models::identity::Identity,
        _employee: &accounts::models::employee::Employee,
    ) -> AccountResult<()> {
        Ok(())
    }

    async fn find_by_id(
        &self,
        _employee_id: &EmployeeId,
    ) -> AccountResult<Option<accounts::models::employee::Employee>> {
        Ok(None)
    }

    async fn find_by_email(
        &self,
        _email: &accounts::models::email::Email,
    ) -> AccountResult<Option<accounts::models::employee::Employee>> {
        Ok(None)
    }

    async fn search_by_name(
        &self,
        _name: &str,
    ) -> AccountResult<Vec<accounts::models::employee::Employee>> {
        Ok(Vec::new())
    }

    async fn exists_by_id(&self, employee_id: &EmployeeId) -> AccountResult<bool> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .contains(&employee_id.into_uuid()))
    }
}

// ============================================================================
// Jobs repository double
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryJobs {
    jobs: Arc<Mutex<Vec<Job>>>,
    applications: Arc<Mutex<Vec<Application>>>,
    fail_application_insert: Arc<AtomicBool>,
}

impl InMemoryJobs {
    fn with_job(self, job: Job) -> Self {
        self.jobs.lock().unwrap().push(job);
        self
    }

    fn failing_application_inserts(self) -> Self {
        self.fail_application_insert.store(true, Ordering::SeqCst);
        self
    }

    fn application_count(&self) -> usize {
        self.applications.lock().unwrap().len()
    }
}

impl JobRepository for InMemoryJobs {
    async fn create(&self, job: &Job) -> JobsResult<()> {
        self.jobs.lock().unwrap().push(job.clone());
        Ok(())
    }

    async fn find_by_id(&self, job_id: &JobId) -> JobsResult<Option<Job>> {
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .find(|j| &j.job_id == job_id)
            .cloned())
    }

    async fn exists_by_id(&self, job_id: &JobId) -> JobsResult<bool> {
        Ok(self.jobs.lock().unwrap().iter().any(|j| &j.job_id == job_id))
    }

    async fn list_by_company(&self, company_id: &CompanyId) -> JobsResult<Vec<Job>> {
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|j| &j.company_id == company_id)
            .cloned()
            .collect())
    }
}

impl ApplicationRepository for InMemoryJobs {
    async fn create(&self, application: &Application) -> JobsResult<()> {
        if self.fail_application_insert.load(Ordering::SeqCst) {
            return Err(JobsError::Internal("simulated insert failure".to_string()));
        }
        self.applications.lock().unwrap().push(application.clone());
        Ok(())
    }

    async fn list_by_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> JobsResult<Vec<ApplicationSummary>> {
        let jobs = self.jobs.lock().unwrap();
        Ok(self
            .applications
            .lock()
            .unwrap()
            .iter()
            .filter(|a| &a.employee_id == employee_id)
            .map(|a| ApplicationSummary {
                application_id: a.application_id,
                job_id: a.job_id,
                job_title: jobs
                    .iter()
                    .find(|j| j.job_id == a.job_id)
                    .map(|j| j.title.clone())
                    .unwrap_or_default(),
                document_path: a.document_path.clone(),
                applied_at: a.applied_at,
            })
            .collect())
    }
}

// ============================================================================
// Document store double
// ============================================================================

#[derive(Clone, Default)]
struct MemoryDocumentStore {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryDocumentStore {
    fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    fn contains(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

impl DocumentStore for MemoryDocumentStore {
    async fn save(&self, original_name: Option<&str>, bytes: &[u8]) -> JobsResult<StoredDocument> {
        let path = format!("{}_{}", Uuid::new_v4(), original_name.unwrap_or("document"));
        self.files.lock().unwrap().insert(path.clone(), bytes.to_vec());
        Ok(StoredDocument { path })
    }

    async fn delete(&self, path: &str) -> JobsResult<()> {
        self.files
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| JobsError::Storage(format!("No such document: {path}")))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn seeded_job(company_id: CompanyId) -> Job {
    Job::new(
        company_id,
        "Software Engineer".to_string(),
        "Build backends".to_string(),
        "Remote".to_string(),
        SalaryRange::new(50_000, 80_000).unwrap(),
    )
}

fn submit_use_case(
    profiles: &InMemoryProfiles,
    repo: &InMemoryJobs,
    store: &MemoryDocumentStore,
) -> SubmitApplicationUseCase<InMemoryProfiles, InMemoryJobs, InMemoryJobs, MemoryDocumentStore> {
    SubmitApplicationUseCase::new(
        Arc::new(profiles.clone()),
        Arc::new(repo.clone()),
        Arc::new(repo.clone()),
        Arc::new(store.clone()),
    )
}

fn submit_input(employee_id: EmployeeId, job_id: JobId, bytes: &[u8]) -> SubmitApplicationInput {
    SubmitApplicationInput {
        employee_id,
        job_id,
        document_name: Some("resume.pdf".to_string()),
        document_bytes: bytes.to_vec(),
    }
}

// ============================================================================
// Application submission
// ============================================================================

#[tokio::test]
async fn test_submit_application_happy_path() {
    let company_id = CompanyId::new();
    let employee_id = EmployeeId::new();
    let job = seeded_job(company_id);
    let job_id = job.job_id;

    let profiles = InMemoryProfiles::default()
        .with_company(&company_id)
        .with_employee(&employee_id);
    let repo = InMemoryJobs::default().with_job(job);
    let store = MemoryDocumentStore::default();

    let application = submit_use_case(&profiles, &repo, &store)
        .execute(submit_input(employee_id, job_id, b"my resume"))
        .await
        .unwrap();

    assert_eq!(application.employee_id, employee_id);
    assert_eq!(application.job_id, job_id);
    assert_eq!(repo.application_count(), 1);
    assert_eq!(store.file_count(), 1);
    assert!(store.contains(&application.document_path));
}

#[tokio::test]
async fn test_submit_fails_for_missing_employee() {
    let company_id = CompanyId::new();
    let job = seeded_job(company_id);
    let job_id = job.job_id;

    let profiles = InMemoryProfiles::default().with_company(&company_id);
    let repo = InMemoryJobs::default().with_job(job);
    let store = MemoryDocumentStore::default();

    let result = submit_use_case(&profiles, &repo, &store)
        .execute(submit_input(EmployeeId::new(), job_id, b"my resume"))
        .await;

    assert!(matches!(result, Err(JobsError::EmployeeNotFound)));
    // Nothing persisted on a failed precondition
    assert_eq!(repo.application_count(), 0);
    assert_eq!(store.file_count(), 0);
}

#[tokio::test]
async fn test_submit_fails_for_missing_job() {
    let employee_id = EmployeeId::new();

    let profiles = InMemoryProfiles::default().with_employee(&employee_id);
    let repo = InMemoryJobs::default();
    let store = MemoryDocumentStore::default();

    let result = submit_use_case(&profiles, &repo, &store)
        .execute(submit_input(employee_id, JobId::new(), b"my resume"))
        .await;

    assert!(matches!(result, Err(JobsError::JobNotFound)));
    assert_eq!(repo.application_count(), 0);
    assert_eq!(store.file_count(), 0);
}

#[tokio::test]
async fn test_submit_fails_for_empty_document() {
    let company_id = CompanyId::new();
    let employee_id = EmployeeId::new();
    let job = seeded_job(company_id);
    let job_id = job.job_id;

    let profiles = InMemoryProfiles::default()
        .with_company(&company_id)
        .with_employee(&employee_id);
    let repo = InMemoryJobs::default().with_job(job);
    let store = MemoryDocumentStore::default();

    let result = submit_use_case(&profiles, &repo, &store)
        .execute(submit_input(employee_id, job_id, b""))
        .await;

    assert!(matches!(result, Err(JobsError::MissingDocument)));
    assert_eq!(repo.application_count(), 0);
    assert_eq!(store.file_count(), 0);
}

#[tokio::test]
async fn test_record_insert_failure_cleans_up_document() {
    let company_id = CompanyId::new();
    let employee_id = EmployeeId::new();
    let job = seeded_job(company_id);
    let job_id = job.job_id;

    let profiles = InMemoryProfiles::default()
        .with_company(&company_id)
        .with_employee(&employee_id);
    let repo = InMemoryJobs::default()
        .with_job(job)
        .failing_application_inserts();
    let store = MemoryDocumentStore::default();

    let result = submit_use_case(&profiles, &repo, &store)
        .execute(submit_input(employee_id, job_id, b"my resume"))
        .await;

    assert!(matches!(result, Err(JobsError::Internal(_))));
    assert_eq!(repo.application_count(), 0);
    // The stored file got its compensating delete
    assert_eq!(store.file_count(), 0);
}

// ============================================================================
// Job posting
// ============================================================================

#[tokio::test]
async fn test_post_job_happy_path() {
    let company_id = CompanyId::new();
    let profiles = InMemoryProfiles::default().with_company(&company_id);
    let repo = InMemoryJobs::default();

    let use_case = PostJobUseCase::new(Arc::new(profiles), Arc::new(repo.clone()));

    let job = use_case
        .execute(PostJobInput {
            company_id,
            title: "Data Analyst".to_string(),
            description: "Analyze data".to_string(),
            location: "Berlin".to_string(),
            salary_min: 40_000,
            salary_max: 60_000,
        })
        .await
        .unwrap();

    assert_eq!(job.company_id, company_id);
    assert!(JobRepository::exists_by_id(&repo, &job.job_id).await.unwrap());
}

#[tokio::test]
async fn test_post_job_fails_for_missing_company() {
    let profiles = InMemoryProfiles::default();
    let repo = InMemoryJobs::default();

    let use_case = PostJobUseCase::new(Arc::new(profiles), Arc::new(repo));

    let result = use_case
        .execute(PostJobInput {
            company_id: CompanyId::new(),
            title: "Data Analyst".to_string(),
            description: String::new(),
            location: String::new(),
            salary_min: 40_000,
            salary_max: 60_000,
        })
        .await;

    assert!(matches!(result, Err(JobsError::CompanyNotFound)));
}

#[tokio::test]
async fn test_post_job_validates_title_and_salary() {
    let company_id = CompanyId::new();
    let profiles = InMemoryProfiles::default().with_company(&company_id);
    let repo = InMemoryJobs::default();

    let use_case = PostJobUseCase::new(Arc::new(profiles), Arc::new(repo));

    let result = use_case
        .execute(PostJobInput {
            company_id,
            title: "   ".to_string(),
            description: String::new(),
            location: String::new(),
            salary_min: 40_000,
            salary_max: 60_000,
        })
        .await;
    assert!(matches!(result, Err(JobsError::Validation(_))));

    let result = use_case
        .execute(PostJobInput {
            company_id,
            title: "Data Analyst".to_string(),
            description: String::new(),
            location: String::new(),
            salary_min: 60_000,
            salary_max: 40_000,
        })
        .await;
    assert!(matches!(result, Err(JobsError::Validation(_))));
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_list_jobs_fails_for_missing_company() {
    let queries = JobQueries::new(
        Arc::new(InMemoryProfiles::default()),
        Arc::new(InMemoryJobs::default()),
    );

    let result = queries.list_for_company(&CompanyId::new()).await;
    assert!(matches!(result, Err(JobsError::CompanyNotFound)));
}

#[tokio::test]
async fn test_list_applications_joins_job_title() {
    let company_id = CompanyId::new();
    let employee_id = EmployeeId::new();
    let job = seeded_job(company_id);
    let job_id = job.job_id;

    let profiles = InMemoryProfiles::default()
        .with_company(&company_id)
        .with_employee(&employee_id);
    let repo = InMemoryJobs::default().with_job(job);
    let store = MemoryDocumentStore::default();

    submit_use_case(&profiles, &repo, &store)
        .execute(submit_input(employee_id, job_id, b"my resume"))
        .await
        .unwrap();

    let queries = ApplicationQueries::new(Arc::new(profiles), Arc::new(repo));
    let summaries = queries.list_for_employee(&employee_id).await.unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].job_id, job_id);
    assert_eq!(summaries[0].job_title, "Software Engineer");
}

#[tokio::test]
async fn test_list_applications_fails_for_missing_employee() {
    let queries = ApplicationQueries::new(
        Arc::new(InMemoryProfiles::default()),
        Arc::new(InMemoryJobs::default()),
    );

    let result = queries.list_for_employee(&EmployeeId::new()).await;
    assert!(matches!(result, Err(JobsError::EmployeeNotFound)));
}
