//! Employee Query Service
//!
//! Read-side operations over employee profiles.

use std::sync::Arc;

use crate::domain::entity::employee::Employee;
use crate::domain::repository::EmployeeRepository;
use crate::error::AccountResult;

/// Employee queries
pub struct EmployeeQueries<E>
where
    E: EmployeeRepository,
{
    employee_repo: Arc<E>,
}

impl<E> EmployeeQueries<E>
where
    E: EmployeeRepository,
{
    pub fn new(employee_repo: Arc<E>) -> Self {
        Self { employee_repo }
    }

    /// Case-insensitive name substring search
    pub async fn search(&self, name: &str) -> AccountResult<Vec<Employee>> {
        self.employee_repo.search_by_name(name.trim()).await
    }
}
