//! Company Sign In Use Case
//!
//! Authenticates a company account and issues a bearer token whose
//! subject is the company profile id.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::application::token::TokenService;
use crate::domain::entity::company::Company;
use crate::domain::repository::{CompanyRepository, IdentityRepository};
use crate::domain::value_object::{
    account_role::AccountRole, credentials::RawPassword, email::Email,
};
use crate::error::{AccountError, AccountResult};

/// Company sign in input
pub struct CompanySignInInput {
    pub email: String,
    pub password: String,
}

/// Company sign in output
#[derive(Debug)]
pub struct CompanySignInOutput {
    pub token: String,
    pub company: Company,
}

/// Company sign in use case
pub struct CompanySignInUseCase<I, C>
where
    I: IdentityRepository,
    C: CompanyRepository,
{
    identity_repo: Arc<I>,
    company_repo: Arc<C>,
    tokens: Arc<TokenService>,
    config: Arc<AccountsConfig>,
}

impl<I, C> CompanySignInUseCase<I, C>
where
    I: IdentityRepository,
    C: CompanyRepository,
{
    pub fn new(
        identity_repo: Arc<I>,
        company_repo: Arc<C>,
        tokens: Arc<TokenService>,
        config: Arc<AccountsConfig>,
    ) -> Self {
        Self {
            identity_repo,
            company_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: CompanySignInInput) -> AccountResult<CompanySignInOutput> {
        // Every failure before password verification maps to the same
        // InvalidCredentials: a caller must not learn whether the email
        // exists or carries a different role.
        let email = Email::new(&input.email).map_err(|_| AccountError::InvalidCredentials)?;

        let identity = self
            .identity_repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if identity.role != AccountRole::Company {
            return Err(AccountError::InvalidCredentials);
        }

        let password = RawPassword::new(input.password, &self.config.password_policy)
            .map_err(|_| AccountError::InvalidCredentials)?;

        if !identity.verify_password(&password) {
            return Err(AccountError::InvalidCredentials);
        }

        // Identity without a profile is registration drift; fail closed
        // rather than issuing a token with no subject.
        let company = self
            .company_repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::ProfileMissing)?;

        let token = self.tokens.issue(
            company.company_id.into_uuid(),
            &company.email,
            AccountRole::Company,
            &company.name,
        )?;

        tracing::info!(company_id = %company.company_id, "Company signed in");

        Ok(CompanySignInOutput { token, company })
    }
}
