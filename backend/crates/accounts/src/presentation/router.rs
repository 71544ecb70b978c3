//! Accounts Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::application::token::TokenService;
use crate::domain::repository::{CompanyRepository, EmployeeRepository, IdentityRepository};
use crate::infra::postgres::PgAccountsRepository;
use crate::presentation::handlers::{self, AccountsState};

/// Create the accounts router with the PostgreSQL repository
pub fn accounts_router(
    repo: PgAccountsRepository,
    tokens: Arc<TokenService>,
    config: Arc<AccountsConfig>,
) -> Router {
    accounts_router_generic(repo, tokens, config)
}

/// Create a generic accounts router for any repository implementation
pub fn accounts_router_generic<R>(
    repo: R,
    tokens: Arc<TokenService>,
    config: Arc<AccountsConfig>,
) -> Router
where
    R: IdentityRepository + CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let state = AccountsState {
        repo: Arc::new(repo),
        tokens,
        config,
    };

    Router::new()
        .route("/companies/register", post(handlers::register_company::<R>))
        .route("/companies/login", post(handlers::login_company::<R>))
        .route("/companies", get(handlers::list_companies::<R>))
        .route("/companies/{company_id}", get(handlers::get_company::<R>))
        .route(
            "/companies/category/{industry}",
            get(handlers::companies_by_industry::<R>),
        )
        .route("/employees/register", post(handlers::register_employee::<R>))
        .route("/employees/login", post(handlers::login_employee::<R>))
        .route("/employees/search", get(handlers::search_employees::<R>))
        .with_state(state)
}
