//! Review Entity
//!
//! A rating an employee gives a company. References both actors; both
//! must exist when the review is created.

use chrono::{DateTime, Utc};

use accounts::models::ids::{CompanyId, EmployeeId};

use crate::domain::value_object::{ids::ReviewId, rating::Rating};

/// Review entity
#[derive(Debug, Clone)]
pub struct Review {
    /// Review identifier
    pub review_id: ReviewId,
    /// Reviewed company
    pub company_id: CompanyId,
    /// Reviewing employee
    pub employee_id: EmployeeId,
    /// 1-5 rating
    pub rating: Rating,
    /// Free-text comment
    pub comment: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Create a new review
    pub fn new(
        company_id: CompanyId,
        employee_id: EmployeeId,
        rating: Rating,
        comment: String,
    ) -> Self {
        Self {
            review_id: ReviewId::new(),
            company_id,
            employee_id,
            rating,
            comment,
            created_at: Utc::now(),
        }
    }
}
