//! Jobs Router
//!
//! The application routes are gated on role `Employee`; the job posting
//! and listing routes are open, matching the original API surface.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use accounts::application::token::TokenService;
use accounts::domain::repository::{CompanyRepository, EmployeeRepository};
use accounts::models::account_role::AccountRole;
use accounts::presentation::middleware::{RoleGate, require_role};

use crate::domain::document_store::DocumentStore;
use crate::domain::repository::{ApplicationRepository, JobRepository};
use crate::infra::fs_store::FsDocumentStore;
use crate::infra::postgres::PgJobsRepository;
use crate::presentation::handlers::{self, JobsState};

/// Create the jobs router with PostgreSQL and filesystem backends
pub fn jobs_router(
    repo: PgJobsRepository,
    profiles: accounts::PgAccountsRepository,
    documents: FsDocumentStore,
    tokens: Arc<TokenService>,
) -> Router {
    jobs_router_generic(repo, profiles, documents, tokens)
}

/// Create a generic jobs router for any backend implementations
pub fn jobs_router_generic<R, P, D>(
    repo: R,
    profiles: P,
    documents: D,
    tokens: Arc<TokenService>,
) -> Router
where
    R: JobRepository + ApplicationRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
    D: DocumentStore + Clone + Send + Sync + 'static,
{
    let state = JobsState {
        repo: Arc::new(repo),
        profiles: Arc::new(profiles),
        documents: Arc::new(documents),
    };

    let employee_gate = RoleGate::new(tokens, AccountRole::Employee);

    let gated = Router::new()
        .route(
            "/employees/{employee_id}/apply/{job_id}",
            post(handlers::apply_for_job::<R, P, D>),
        )
        .route(
            "/employees/{employee_id}/applications",
            get(handlers::list_applications::<R, P, D>),
        )
        .route_layer(middleware::from_fn(move |req, next| {
            require_role(employee_gate.clone(), req, next)
        }))
        .with_state(state.clone());

    Router::new()
        .route(
            "/companies/{company_id}/jobs",
            post(handlers::post_job::<R, P, D>).get(handlers::list_company_jobs::<R, P, D>),
        )
        .with_state(state)
        .merge(gated)
}
