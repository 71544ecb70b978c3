//! Employee Sign In Use Case
//!
//! Authenticates an employee account and issues a bearer token whose
//! subject is the employee profile id.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::application::token::TokenService;
use crate::domain::entity::employee::Employee;
use crate::domain::repository::{EmployeeRepository, IdentityRepository};
use crate::domain::value_object::{
    account_role::AccountRole, credentials::RawPassword, email::Email,
};
use crate::error::{AccountError, AccountResult};

/// Employee sign in input
pub struct EmployeeSignInInput {
    pub email: String,
    pub password: String,
}

/// Employee sign in output
#[derive(Debug)]
pub struct EmployeeSignInOutput {
    pub token: String,
    pub employee: Employee,
    pub roles: Vec<&'static str>,
}

/// Employee sign in use case
pub struct EmployeeSignInUseCase<I, E>
where
    I: IdentityRepository,
    E: EmployeeRepository,
{
    identity_repo: Arc<I>,
    employee_repo: Arc<E>,
    tokens: Arc<TokenService>,
    config: Arc<AccountsConfig>,
}

impl<I, E> EmployeeSignInUseCase<I, E>
where
    I: IdentityRepository,
    E: EmployeeRepository,
{
    pub fn new(
        identity_repo: Arc<I>,
        employee_repo: Arc<E>,
        tokens: Arc<TokenService>,
        config: Arc<AccountsConfig>,
    ) -> Self {
        Self {
            identity_repo,
            employee_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: EmployeeSignInInput) -> AccountResult<EmployeeSignInOutput> {
        let email = Email::new(&input.email).map_err(|_| AccountError::InvalidCredentials)?;

        let identity = self
            .identity_repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if identity.role != AccountRole::Employee {
            return Err(AccountError::InvalidCredentials);
        }

        let password = RawPassword::new(input.password, &self.config.password_policy)
            .map_err(|_| AccountError::InvalidCredentials)?;

        if !identity.verify_password(&password) {
            return Err(AccountError::InvalidCredentials);
        }

        let employee = self
            .employee_repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::ProfileMissing)?;

        let token = self.tokens.issue(
            employee.employee_id.into_uuid(),
            &employee.email,
            AccountRole::Employee,
            &employee.full_name,
        )?;

        tracing::info!(employee_id = %employee.employee_id, "Employee signed in");

        Ok(EmployeeSignInOutput {
            token,
            employee,
            roles: vec![AccountRole::Employee.code()],
        })
    }
}
