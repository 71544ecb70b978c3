//! Register Company Use Case
//!
//! Creates a company account: identity (role `Company`) and company
//! profile in one transaction.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::entity::{company::Company, identity::Identity};
use crate::domain::repository::{CompanyRepository, IdentityRepository};
use crate::domain::value_object::{
    account_role::AccountRole,
    credentials::{PasswordDigest, RawPassword},
    email::Email,
};
use crate::error::{AccountError, AccountResult, FieldViolation};

/// Register company input
pub struct RegisterCompanyInput {
    pub name: String,
    pub industry: String,
    pub email: String,
    pub password: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
}

/// Register company use case
pub struct RegisterCompanyUseCase<I, C>
where
    I: IdentityRepository,
    C: CompanyRepository,
{
    identity_repo: Arc<I>,
    company_repo: Arc<C>,
    config: Arc<AccountsConfig>,
}

impl<I, C> RegisterCompanyUseCase<I, C>
where
    I: IdentityRepository,
    C: CompanyRepository,
{
    pub fn new(identity_repo: Arc<I>, company_repo: Arc<C>, config: Arc<AccountsConfig>) -> Self {
        Self {
            identity_repo,
            company_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterCompanyInput) -> AccountResult<Company> {
        let mut violations = Vec::new();

        let name = input.name.trim().to_string();
        if name.is_empty() {
            violations.push(FieldViolation::new("name", "must not be empty"));
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

        // Pre-check is an optimization only; the unique index on
        // identities.email is the authoritative gate.
        if self.identity_repo.find_by_email(&email).await?.is_some() {
            return Err(AccountError::DuplicateEmail);
        }

        let digest = PasswordDigest::from_raw(&password)
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        let identity = Identity::new(email.clone(), digest, AccountRole::Company);
        let company = Company::new(
            name,
            input.industry.trim().to_string(),
            email,
            input.description,
            input.logo_url,
        );

        self.company_repo
            .create_with_identity(&identity, &company)
            .await?;

        tracing::info!(
            company_id = %company.company_id,
            email = %company.email,
            "Company registered"
        );

        Ok(company)
    }
}
