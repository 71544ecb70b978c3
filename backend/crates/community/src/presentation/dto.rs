//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{blog::Blog, review::Review};

// ============================================================================
// Blogs
// ============================================================================

/// Blog creation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Blog response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub blog_id: Uuid,
    pub title: String,
    pub content: String,
    pub company_id: Option<Uuid>,
    pub employee_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&Blog> for BlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            blog_id: blog.blog_id.into_uuid(),
            title: blog.title.clone(),
            content: blog.content.clone(),
            company_id: blog.author.company_id().map(|id| id.into_uuid()),
            employee_id: blog.author.employee_id().map(|id| id.into_uuid()),
            created_at: blog.created_at,
        }
    }
}

// ============================================================================
// Reviews
// ============================================================================

/// Review creation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub company_id: Uuid,
    pub employee_id: Uuid,
    pub rating: i16,
    #[serde(default)]
    pub comment: String,
}

/// Review response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub review_id: Uuid,
    pub company_id: Uuid,
    pub employee_id: Uuid,
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Review> for ReviewResponse {
    fn from(review: &Review) -> Self {
        Self {
            review_id: review.review_id.into_uuid(),
            company_id: review.company_id.into_uuid(),
            employee_id: review.employee_id.into_uuid(),
            rating: review.rating.value(),
            comment: review.comment.clone(),
            created_at: review.created_at,
        }
    }
}
