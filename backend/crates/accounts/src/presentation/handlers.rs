//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::AccountsConfig;
use crate::application::token::TokenService;
use crate::application::{
    CompanyQueries, CompanySignInInput, CompanySignInUseCase, EmployeeQueries,
    EmployeeSignInInput, EmployeeSignInUseCase, RegisterCompanyInput, RegisterCompanyUseCase,
    RegisterEmployeeInput, RegisterEmployeeUseCase,
};
use crate::domain::repository::{CompanyRepository, EmployeeRepository, IdentityRepository};
use crate::domain::value_object::ids::CompanyId;
use crate::error::AccountResult;
use crate::presentation::dto::{
    CompanyLoginResponse, CompanyResponse, EmployeeLoginResponse, EmployeeResponse,
    EmployeeSearchParams, LoginRequest, RegisterCompanyRequest, RegisterEmployeeRequest,
};

/// Shared state for accounts handlers
#[derive(Clone)]
pub struct AccountsState<R>
where
    R: IdentityRepository + CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AccountsConfig>,
}

// ============================================================================
// Company registration / login
// ============================================================================

/// POST /companies/register
pub async fn register_company<R>(
    State(state): State<AccountsState<R>>,
    Json(req): Json<RegisterCompanyRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: IdentityRepository + CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterCompanyUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let company = use_case
        .execute(RegisterCompanyInput {
            name: req.name,
            industry: req.industry,
            email: req.email,
            password: req.password,
            description: req.description,
            logo_url: req.logo_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CompanyResponse::from(&company))))
}

/// POST /companies/login
pub async fn login_company<R>(
    State(state): State<AccountsState<R>>,
    Json(req): Json<LoginRequest>,
) -> AccountResult<Json<CompanyLoginResponse>>
where
    R: IdentityRepository + CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let use_case = CompanySignInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(CompanySignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(CompanyLoginResponse {
        token: output.token,
        company: CompanyResponse::from(&output.company),
    }))
}

// ============================================================================
// Company queries
// ============================================================================

/// GET /companies
pub async fn list_companies<R>(
    State(state): State<AccountsState<R>>,
) -> AccountResult<Json<Vec<CompanyResponse>>>
where
    R: IdentityRepository + CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let queries = CompanyQueries::new(state.repo.clone());
    let companies = queries.list().await?;
    Ok(Json(companies.iter().map(CompanyResponse::from).collect()))
}

/// GET /companies/{company_id}
pub async fn get_company<R>(
    State(state): State<AccountsState<R>>,
    Path(company_id): Path<Uuid>,
) -> AccountResult<Json<CompanyResponse>>
where
    R: IdentityRepository + CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let queries = CompanyQueries::new(state.repo.clone());
    let company = queries.by_id(&CompanyId::from_uuid(company_id)).await?;
    Ok(Json(CompanyResponse::from(&company)))
}

/// GET /companies/category/{industry}
pub async fn companies_by_industry<R>(
    State(state): State<AccountsState<R>>,
    Path(industry): Path<String>,
) -> AccountResult<Json<Vec<CompanyResponse>>>
where
    R: IdentityRepository + CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let queries = CompanyQueries::new(state.repo.clone());
    let companies = queries.by_industry(&industry).await?;
    Ok(Json(companies.iter().map(CompanyResponse::from).collect()))
}

// ============================================================================
// Employee registration / login
// ============================================================================

/// POST /employees/register
pub async fn register_employee<R>(
    State(state): State<AccountsState<R>>,
    Json(req): Json<RegisterEmployeeRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: IdentityRepository + CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterEmployeeUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let employee = use_case
        .execute(RegisterEmployeeInput {
            full_name: req.full_name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(&employee))))
}

/// POST /employees/login
pub async fn login_employee<R>(
    State(state): State<AccountsState<R>>,
    Json(req): Json<LoginRequest>,
) -> AccountResult<Json<EmployeeLoginResponse>>
where
    R: IdentityRepository + CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let use_case = EmployeeSignInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(EmployeeSignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(EmployeeLoginResponse {
        token: output.token,
        employee: EmployeeResponse::from(&output.employee),
        roles: output.roles,
    }))
}

// ============================================================================
// Employee search
// ============================================================================

/// GET /employees/search?name=
pub async fn search_employees<R>(
    State(state): State<AccountsState<R>>,
    Query(params): Query<EmployeeSearchParams>,
) -> AccountResult<Json<Vec<EmployeeResponse>>>
where
    R: IdentityRepository + CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let queries = EmployeeQueries::new(state.repo.clone());
    let employees = queries.search(&params.name).await?;
    Ok(Json(employees.iter().map(EmployeeResponse::from).collect()))
}
