//! Admin Bootstrap Use Case
//!
//! One-time, single-threaded startup step that seeds the administrator
//! account. There is no hardcoded credential fallback: release builds
//! must be given `ADMIN_EMAIL`/`ADMIN_PASSWORD` explicitly and the binary
//! fails startup loudly when they are missing. Debug builds may use
//! `BootstrapConfig::development()`.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::application::register_company::{RegisterCompanyInput, RegisterCompanyUseCase};
use crate::domain::repository::{CompanyRepository, IdentityRepository};
use crate::error::{AccountError, AccountResult};

/// Admin bootstrap configuration
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub admin_email: String,
    pub admin_password: String,
}

impl BootstrapConfig {
    pub fn new(admin_email: String, admin_password: String) -> Self {
        Self {
            admin_email,
            admin_password,
        }
    }

    /// Development credentials (debug builds only)
    pub fn development() -> Self {
        Self {
            admin_email: "admin@jobportal.local".to_string(),
            admin_password: "admin-dev-password".to_string(),
        }
    }
}

/// Admin bootstrap use case
///
/// Idempotent: registers the admin as a `Company` account once; a
/// duplicate email (already bootstrapped, or a concurrent instance won
/// the race) is success.
pub struct BootstrapAdminUseCase<I, C>
where
    I: IdentityRepository,
    C: CompanyRepository,
{
    identity_repo: Arc<I>,
    company_repo: Arc<C>,
    config: Arc<AccountsConfig>,
}

impl<I, C> BootstrapAdminUseCase<I, C>
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

    pub async fn execute(&self, bootstrap: &BootstrapConfig) -> AccountResult<()> {
        let register = RegisterCompanyUseCase::new(
            self.identity_repo.clone(),
            self.company_repo.clone(),
            self.config.clone(),
        );

        let input = RegisterCompanyInput {
            name: "Administrator".to_string(),
            industry: "Administration".to_string(),
            email: bootstrap.admin_email.clone(),
            password: bootstrap.admin_password.clone(),
            description: None,
            logo_url: None,
        };

        match register.execute(input).await {
            Ok(company) => {
                tracing::info!(
                    company_id = %company.company_id,
                    "Admin account bootstrapped"
                );
                Ok(())
            }
            Err(AccountError::DuplicateEmail) => {
                tracing::info!("Admin account already present, skipping bootstrap");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
