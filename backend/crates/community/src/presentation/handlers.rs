//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use accounts::domain::repository::{CompanyRepository, EmployeeRepository};
use accounts::models::ids::{CompanyId, EmployeeId};

use crate::application::{BlogService, ReviewService};
use crate::domain::repository::{BlogRepository, ReviewRepository};
use crate::error::CommunityResult;
use crate::presentation::dto::{
    BlogResponse, CreateBlogRequest, CreateReviewRequest, ReviewResponse,
};

/// Shared state for community handlers
#[derive(Clone)]
pub struct CommunityState<R, P>
where
    R: BlogRepository + ReviewRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub profiles: Arc<P>,
}

// ============================================================================
// Blogs
// ============================================================================

/// POST /companies/{company_id}/blogs
pub async fn create_company_blog<R, P>(
    State(state): State<CommunityState<R, P>>,
    Path(company_id): Path<Uuid>,
    Json(req): Json<CreateBlogRequest>,
) -> CommunityResult<impl IntoResponse>
where
    R: BlogRepository + ReviewRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let service = BlogService::new(state.profiles.clone(), state.repo.clone());
    let blog = service
        .create_for_company(CompanyId::from_uuid(company_id), req.title, req.content)
        .await?;

    Ok((StatusCode::CREATED, Json(BlogResponse::from(&blog))))
}

/// GET /companies/{company_id}/blogs
pub async fn list_company_blogs<R, P>(
    State(state): State<CommunityState<R, P>>,
    Path(company_id): Path<Uuid>,
) -> CommunityResult<Json<Vec<BlogResponse>>>
where
    R: BlogRepository + ReviewRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let service = BlogService::new(state.profiles.clone(), state.repo.clone());
    let blogs = service
        .list_for_company(&CompanyId::from_uuid(company_id))
        .await?;

    Ok(Json(blogs.iter().map(BlogResponse::from).collect()))
}

/// POST /employees/{employee_id}/blogs
pub async fn create_employee_blog<R, P>(
    State(state): State<CommunityState<R, P>>,
    Path(employee_id): Path<Uuid>,
    Json(req): Json<CreateBlogRequest>,
) -> CommunityResult<impl IntoResponse>
where
    R: BlogRepository + ReviewRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let service = BlogService::new(state.profiles.clone(), state.repo.clone());
    let blog = service
        .create_for_employee(EmployeeId::from_uuid(employee_id), req.title, req.content)
        .await?;

    Ok((StatusCode::CREATED, Json(BlogResponse::from(&blog))))
}

/// GET /employees/{employee_id}/blogs
pub async fn list_employee_blogs<R, P>(
    State(state): State<CommunityState<R, P>>,
    Path(employee_id): Path<Uuid>,
) -> CommunityResult<Json<Vec<BlogResponse>>>
where
    R: BlogRepository + ReviewRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let service = BlogService::new(state.profiles.clone(), state.repo.clone());
    let blogs = service
        .list_for_employee(&EmployeeId::from_uuid(employee_id))
        .await?;

    Ok(Json(blogs.iter().map(BlogResponse::from).collect()))
}

// ============================================================================
// Reviews
// ============================================================================

/// POST /reviews
pub async fn create_review<R, P>(
    State(state): State<CommunityState<R, P>>,
    Json(req): Json<CreateReviewRequest>,
) -> CommunityResult<impl IntoResponse>
where
    R: BlogRepository + ReviewRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let service = ReviewService::new(state.profiles.clone(), state.repo.clone());
    let review = service
        .create(
            CompanyId::from_uuid(req.company_id),
            EmployeeId::from_uuid(req.employee_id),
            req.rating,
            req.comment,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ReviewResponse::from(&review))))
}

/// GET /companies/{company_id}/reviews
pub async fn list_company_reviews<R, P>(
    State(state): State<CommunityState<R, P>>,
    Path(company_id): Path<Uuid>,
) -> CommunityResult<Json<Vec<ReviewResponse>>>
where
    R: BlogRepository + ReviewRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let service = ReviewService::new(state.profiles.clone(), state.repo.clone());
    let reviews = service
        .list_for_company(&CompanyId::from_uuid(company_id))
        .await?;

    Ok(Json(reviews.iter().map(ReviewResponse::from).collect()))
}

/// GET /employees/{employee_id}/reviews
pub async fn list_employee_reviews<R, P>(
    State(state): State<CommunityState<R, P>>,
    Path(employee_id): Path<Uuid>,
) -> CommunityResult<Json<Vec<ReviewResponse>>>
where
    R: BlogRepository + ReviewRepository + Clone + Send + Sync + 'static,
    P: CompanyRepository + EmployeeRepository + Clone + Send + Sync + 'static,
{
    let service = ReviewService::new(state.profiles.clone(), state.repo.clone());
    let reviews = service
        .list_for_employee(&EmployeeId::from_uuid(employee_id))
        .await?;

    Ok(Json(reviews.iter().map(ReviewResponse::from).collect()))
}
