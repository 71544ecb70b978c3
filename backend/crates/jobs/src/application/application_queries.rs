//! Application Query Service
//!
//! Read-side operations over job applications.

use std::sync::Arc;

use accounts::domain::repository::EmployeeRepository;
use accounts::models::ids::EmployeeId;

use crate::domain::entity::application::ApplicationSummary;
use crate::domain::repository::ApplicationRepository;
use crate::error::{JobsError, JobsResult};

/// Application queries
pub struct ApplicationQueries<E, A>
where
    E: EmployeeRepository,
    A: ApplicationRepository,
{
    employee_repo: Arc<E>,
    application_repo: Arc<A>,
}

impl<E, A> ApplicationQueries<E, A>
where
    E: EmployeeRepository,
    A: ApplicationRepository,
{
    pub fn new(employee_repo: Arc<E>, application_repo: Arc<A>) -> Self {
        Self {
            employee_repo,
            application_repo,
        }
    }

    /// List an employee's applications, newest first
    pub async fn list_for_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> JobsResult<Vec<ApplicationSummary>> {
        if !self.employee_repo.exists_by_id(employee_id).await? {
            return Err(JobsError::EmployeeNotFound);
        }

        self.application_repo.list_by_employee(employee_id).await
    }
}
