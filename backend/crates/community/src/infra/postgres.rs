//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use accounts::models::ids::{CompanyId, EmployeeId};

use crate::domain::entity::{
    blog::{Blog, BlogAuthor},
    review::Review,
};
use crate::domain::repository::{BlogRepository, ReviewRepository};
use crate::domain::value_object::{
    ids::{BlogId, ReviewId},
    rating::Rating,
};
use crate::error::{CommunityError, CommunityResult};

/// PostgreSQL-backed community repository
#[derive(Clone)]
pub struct PgCommunityRepository {
    pool: PgPool,
}

impl PgCommunityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Blog Repository Implementation
// ============================================================================

impl BlogRepository for PgCommunityRepository {
    async fn create(&self, blog: &Blog) -> CommunityResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blogs (
                blog_id,
                title,
                content,
                company_id,
                employee_id,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(blog.blog_id.as_uuid())
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(blog.author.company_id().map(|id| *id.as_uuid()))
        .bind(blog.author.employee_id().map(|id| *id.as_uuid()))
        .bind(blog.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_company(&self, company_id: &CompanyId) -> CommunityResult<Vec<Blog>> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT
                blog_id,
                title,
                content,
                company_id,
                employee_id,
                created_at
            FROM blogs
            WHERE company_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(company_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_blog()).collect()
    }

    async fn list_by_employee(&self, employee_id: &EmployeeId) -> CommunityResult<Vec<Blog>> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT
                blog_id,
                title,
                content,
                company_id,
                employee_id,
                created_at
            FROM blogs
            WHERE employee_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(employee_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_blog()).collect()
    }
}

// ============================================================================
// Review Repository Implementation
// ============================================================================

impl ReviewRepository for PgCommunityRepository {
    async fn create(&self, review: &Review) -> CommunityResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reviews (
                review_id,
                company_id,
                employee_id,
                rating,
                comment,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(review.review_id.as_uuid())
        .bind(review.company_id.as_uuid())
        .bind(review.employee_id.as_uuid())
        .bind(review.rating.value())
        .bind(&review.comment)
        .bind(review.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_company(&self, company_id: &CompanyId) -> CommunityResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT
                review_id,
                company_id,
                employee_id,
                rating,
                comment,
                created_at
            FROM reviews
            WHERE company_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(company_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_review()).collect())
    }

    async fn list_by_employee(&self, employee_id: &EmployeeId) -> CommunityResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT
                review_id,
                company_id,
                employee_id,
                rating,
                comment,
                created_at
            FROM reviews
            WHERE employee_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(employee_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_review()).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct BlogRow {
    blog_id: Uuid,
    title: String,
    content: String,
    company_id: Option<Uuid>,
    employee_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl BlogRow {
    fn into_blog(self) -> CommunityResult<Blog> {
        let author = match (self.company_id, self.employee_id) {
            (Some(company_id), None) => BlogAuthor::Company(CompanyId::from_uuid(company_id)),
            (None, Some(employee_id)) => BlogAuthor::Employee(EmployeeId::from_uuid(employee_id)),
            _ => {
                return Err(CommunityError::Internal(format!(
                    "Blog {} has no single author",
                    self.blog_id
                )));
            }
        };

        Ok(Blog {
            blog_id: BlogId::from_uuid(self.blog_id),
            title: self.title,
            content: self.content,
            author,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    review_id: Uuid,
    company_id: Uuid,
    employee_id: Uuid,
    rating: i16,
    comment: String,
    created_at: DateTime<Utc>,
}

impl ReviewRow {
    fn into_review(self) -> Review {
        Review {
            review_id: ReviewId::from_uuid(self.review_id),
            company_id: CompanyId::from_uuid(self.company_id),
            employee_id: EmployeeId::from_uuid(self.employee_id),
            rating: Rating::from_db(self.rating),
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}
