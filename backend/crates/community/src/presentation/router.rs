//! Community Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use accounts::domain::repository::{CompanyRepository, EmployeeRepository};

use crate::domain::repository::{BlogRepository, ReviewRepository};
use crate::infra::postgres::PgCommunityRepository;
use crate::presentation::handlers::{self, CommunityState};

/// Create the community router with the PostgreSQL repository
pub fn community_router(
    repo: PgCommunityRepository,
    profiles: accounts::PgAccountsRepository,
) -> Router {
    community_router_generic(repo, profiles)
}

/// Create a generic community router for any repository implementations
pub fn community_router_generic<R, P>(repo: R, profiles: P) -> Router
where
    R: BlogRepository + ReviewRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let state = CommunityState {
        repo: Arc::new(repo),
        profiles: Arc::new(profiles),
    };

    Router::new()
        .route(
            "/companies/{company_id}/blogs",
            post(handlers::create_company_blog::<R, P>).get(handlers::list_company_blogs::<R, P>),
        )
        .route(
            "/employees/{employee_id}/blogs",
            post(handlers::create_employee_blog::<R, P>).get(handlers::list_employee_blogs::<R, P>),
        )
        .route("/reviews", post(handlers::create_review::<R, P>))
        .route(
            "/companies/{company_id}/reviews",
            get(handlers::list_company_reviews::<R, P>),
        )
        .route(
            "/employees/{employee_id}/reviews",
            get(handlers::list_employee_reviews::<R, P>),
        )
        .with_state(state)
}
