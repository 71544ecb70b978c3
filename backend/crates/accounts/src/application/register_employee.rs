//! Register Employee Use Case
//!
//! Creates an employee account: identity (role `Employee`) and employee
//! profile in one transaction.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::entity::{employee::Employee, identity::Identity};
use crate::domain::repository::{EmployeeRepository, IdentityRepository};
use crate::domain::value_object::{
    account_role::AccountRole,
    credentials::{PasswordDigest, RawPassword},
    email::Email,
};
use crate::error::{AccountError, AccountResult, FieldViolation};

/// Register employee input
pub struct RegisterEmployeeInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Register employee use case
pub struct RegisterEmployeeUseCase<I, E>
where
    I: IdentityRepository,
    E: EmployeeRepository,
{
    identity_repo: Arc<I>,
    employee_repo: Arc<E>,
    config: Arc<AccountsConfig>,
}

impl<I, E> RegisterEmployeeUseCase<I, E>
where
    I: IdentityRepository,
    E: EmployeeRepository,
{
    pub fn new(identity_repo: Arc<I>, employee_repo: Arc<E>, config: Arc<AccountsConfig>) -> Self {
        Self {
            identity_repo,
            employee_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterEmployeeInput) -> AccountResult<Employee> {
        let mut violations = Vec::new();

        let full_name = input.full_name.trim().to_string();
        if full_name.is_empty() {
            violations.push(FieldViolation::new("fullName", "must not be empty"));
        }

        let email = Email::new(&input.email);
        if let Err(e) = &email {
            violations.push(FieldViolation::new("email", e.to_string()));
        }

        let password = RawPassword::new(input.password, &self.config.password_policy);
        if let Err(e) = &password {
            violations.push(FieldViolation::new("password", e.to_string()));
        }

        let (Ok(email), Ok(password)) = (email, password) else {
            return Err(AccountError::Validation(violations));
        };
        if !violations.is_empty() {
            return Err(AccountError::Validation(violations));
        }

        if self.identity_repo.find_by_email(&email).await?.is_some() {
            return Err(AccountError::DuplicateEmail);
        }

        let digest = PasswordDigest::from_raw(&password)
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        let identity = Identity::new(email.clone(), digest, AccountRole::Employee);
        let employee = Employee::new(full_name, email);

        self.employee_repo
            .create_with_identity(&identity, &employee)
            .await?;

        tracing::info!(
            employee_id = %employee.employee_id,
            email = %employee.email,
            "Employee registered"
        );

        Ok(employee)
    }
}
