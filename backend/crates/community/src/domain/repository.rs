//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use accounts::models::ids::{CompanyId, EmployeeId};

use crate::domain::entity::{blog::Blog, review::Review};
use crate::error::CommunityResult;

/// Blog repository trait
#[trait_variant::make(BlogRepository: Send)]
pub trait LocalBlogRepository {
    /// Create a new blog post
    async fn create(&self, blog: &Blog) -> CommunityResult<()>;

    /// List blogs authored by a company, newest first
    async fn list_by_company(&self, company_id: &CompanyId) -> CommunityResult<Vec<Blog>>;

    /// List blogs authored by an employee, newest first
    async fn list_by_employee(&self, employee_id: &EmployeeId) -> CommunityResult<Vec<Blog>>;
}

/// Review repository trait
#[trait_variant::make(ReviewRepository: Send)]
pub trait LocalReviewRepository {
    /// Create a new review
    async fn create(&self, review: &Review) -> CommunityResult<()>;

    /// List reviews of a company, newest first
    async fn list_by_company(&self, company_id: &CompanyId) -> CommunityResult<Vec<Review>>;

    /// List reviews written by an employee, newest first
    async fn list_by_employee(&self, employee_id: &EmployeeId) -> CommunityResult<Vec<Review>>;
}
