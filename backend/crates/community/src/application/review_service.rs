//! Review Service
//!
//! Existence-checked create and list operations for reviews. Both the
//! reviewed company and the reviewing employee must exist.

use std::sync::Arc;

use accounts::domain::repository::{CompanyRepository, EmployeeRepository};
use accounts::models::ids::{CompanyId, EmployeeId};

use crate::domain::entity::review::Review;
use crate::domain::repository::ReviewRepository;
use crate::domain::value_object::rating::Rating;
use crate::error::{CommunityError, CommunityResult};

/// Review service
pub struct ReviewService<P, R>
where
    P: CompanyRepository + EmployeeRepository,
    R: ReviewRepository,
{
    profiles: Arc<P>,
    review_repo: Arc<R>,
}

impl<P, R> ReviewService<P, R>
where
    P: CompanyRepository + EmployeeRepository,
    R: ReviewRepository,
{
    pub fn new(profiles: Arc<P>, review_repo: Arc<R>) -> Self {
        Self {
            profiles,
            review_repo,
        }
    }

    /// Create a review
    pub async fn create(
        &self,
        company_id: CompanyId,
        employee_id: EmployeeId,
        rating: i16,
        comment: String,
    ) -> CommunityResult<Review> {
        if !CompanyRepository::exists_by_id(self.profiles.as_ref(), &company_id).await? {
            return Err(CommunityError::CompanyNotFound);
        }

        if !EmployeeRepository::exists_by_id(self.profiles.as_ref(), &employee_id).await? {
            return Err(CommunityError::EmployeeNotFound);
        }

        let rating = Rating::new(rating).map_err(|e| CommunityError::Validation(e.to_string()))?;

        let review = Review::new(company_id, employee_id, rating, comment);
        self.review_repo.create(&review).await?;

        tracing::info!(review_id = %review.review_id, "Review created");

        Ok(review)
    }

    /// List reviews of a company
    pub async fn list_for_company(&self, company_id: &CompanyId) -> CommunityResult<Vec<Review>> {
        if !CompanyRepository::exists_by_id(self.profiles.as_ref(), company_id).await? {
            return Err(CommunityError::CompanyNotFound);
        }

        self.review_repo.list_by_company(company_id).await
    }

    /// List reviews written by an employee
    pub async fn list_for_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> CommunityResult<Vec<Review>> {
        if !EmployeeRepository::exists_by_id(self.profiles.as_ref(), employee_id).await? {
            return Err(CommunityError::EmployeeNotFound);
        }

        self.review_repo.list_by_employee(employee_id).await
    }
}
