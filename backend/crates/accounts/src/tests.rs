//! Unit tests for the accounts use cases
//!
//! Runs the registration/login workflows against in-memory repository
//! doubles; the doubles enforce email uniqueness the way the database
//! unique index does.

use std::sync::{Arc, Mutex};

use crate::application::config::AccountsConfig;
use crate::application::token::TokenService;
use crate::application::{
    BootstrapAdminUseCase, BootstrapConfig, CompanySignInInput, CompanySignInUseCase,
    EmployeeSignInInput, EmployeeSignInUseCase, RegisterCompanyInput, RegisterCompanyUseCase,
    RegisterEmployeeInput, RegisterEmployeeUseCase,
};
use crate::domain::entity::{company::Company, employee::Employee, identity::Identity};
use crate::domain::repository::{CompanyRepository, EmployeeRepository, IdentityRepository};
use crate::domain::value_object::{
    account_role::AccountRole,
    credentials::{PasswordDigest, RawPassword},
    email::Email,
    ids::{CompanyId, EmployeeId},
};
use crate::error::{AccountError, AccountResult};

// ============================================================================
// In-memory repository double
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryAccounts {
    identities: Arc<Mutex<Vec<Identity>>>,
    companies: Arc<Mutex<Vec<Company>>>,
    employees: Arc<Mutex<Vec<Employee>>>,
}

impl InMemoryAccounts {
    /// Insert an identity with no profile, simulating registration drift
    fn insert_identity_only(&self, identity: Identity) {
        self.identities.lock().unwrap().push(identity);
    }

    fn company_count(&self) -> usize {
        self.companies.lock().unwrap().len()
    }

    fn employee_count(&self) -> usize {
        self.employees.lock().unwrap().len()
    }

    /// Uniqueness gate, standing in for the database unique index
    fn create_identity_guarded(&self, identity: &Identity) -> AccountResult<()> {
        let mut identities = self.identities.lock().unwrap();
        if identities.iter().any(|i| i.email == identity.email) {
            return Err(AccountError::DuplicateEmail);
        }
        identities.push(identity.clone());
        Ok(())
    }
}

impl IdentityRepository for InMemoryAccounts {
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Identity>> {
        Ok(self
            .identities
            .lock()
            .unwrap()
            .iter()
            .find(|i| &i.email == email)
            .cloned())
    }
}

impl CompanyRepository for InMemoryAccounts {
    async fn create_with_identity(
        &self,
        identity: &Identity,
        company: &Company,
    ) -> AccountResult<()> {
        self.create_identity_guarded(identity)?;
        self.companies.lock().unwrap().push(company.clone());
        Ok(())
    }

    async fn find_by_id(&self, company_id: &CompanyId) -> AccountResult<Option<Company>> {
        Ok(self
            .companies
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.company_id == company_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Company>> {
        Ok(self
            .companies
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.email == email)
            .cloned())
    }

    async fn list(&self) -> AccountResult<Vec<Company>> {
        Ok(self.companies.lock().unwrap().clone())
    }

    async fn list_by_industry(&self, industry: &str) -> AccountResult<Vec<Company>> {
        Ok(self
            .companies
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.industry == industry)
            .cloned()
            .collect())
    }

    async fn exists_by_id(&self, company_id: &CompanyId) -> AccountResult<bool> {
        Ok(self
            .companies
            .lock()
            .unwrap()
            .iter()
            .any(|c| &c.company_id == company_id))
    }
}

impl EmployeeRepository for InMemoryAccounts {
    async fn create_with_identity(
        &self,
        identity: &Identity,
        employee: &Employee,
    ) -> AccountResult<()> {
        self.create_identity_guarded(identity)?;
        self.employees.lock().unwrap().push(employee.clone());
        Ok(())
    }

    async fn find_by_id(&self, employee_id: &EmployeeId) -> AccountResult<Option<Employee>> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| &e.employee_id == employee_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Employee>> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| &e.email == email)
            .cloned())
    }

    async fn search_by_name(&self, name: &str) -> AccountResult<Vec<Employee>> {
        let needle = name.to_lowercase();
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.full_name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn exists_by_id(&self, employee_id: &EmployeeId) -> AccountResult<bool> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .any(|e| &e.employee_id == employee_id))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

struct Fixture {
    repo: Arc<InMemoryAccounts>,
    config: Arc<AccountsConfig>,
    tokens: Arc<TokenService>,
}

fn fixture() -> Fixture {
    let config = AccountsConfig::development();
    let tokens = Arc::new(TokenService::new(&config.token));
    Fixture {
        repo: Arc::new(InMemoryAccounts::default()),
        config: Arc::new(config),
        tokens,
    }
}

impl Fixture {
    async fn register_company(&self, name: &str, email: &str, password: &str) -> AccountResult<Company> {
        RegisterCompanyUseCase::new(self.repo.clone(), self.repo.clone(), self.config.clone())
            .execute(RegisterCompanyInput {
                name: name.to_string(),
                industry: "Software".to_string(),
                email: email.to_string(),
                password: password.to_string(),
                description: None,
                logo_url: None,
            })
            .await
    }

    async fn register_employee(&self, full_name: &str, email: &str, password: &str) -> AccountResult<Employee> {
        RegisterEmployeeUseCase::new(self.repo.clone(), self.repo.clone(), self.config.clone())
            .execute(RegisterEmployeeInput {
                full_name: full_name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
    }

    async fn login_company(&self, email: &str, password: &str) -> AccountResult<crate::application::CompanySignInOutput> {
        CompanySignInUseCase::new(
            self.repo.clone(),
            self.repo.clone(),
            self.tokens.clone(),
            self.config.clone(),
        )
        .execute(CompanySignInInput {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
    }

    async fn login_employee(&self, email: &str, password: &str) -> AccountResult<crate::application::EmployeeSignInOutput> {
        EmployeeSignInUseCase::new(
            self.repo.clone(),
            self.repo.clone(),
            self.tokens.clone(),
            self.config.clone(),
        )
        .execute(EmployeeSignInInput {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
    }
}

// ============================================================================
// Registration / login round trips
// ============================================================================

#[tokio::test]
async fn test_company_register_login_roundtrip() {
    let fx = fixture();

    // The deployed password policy admits very weak passwords
    let company = fx.register_company("Acme", "a@acme.com", "ab").await.unwrap();

    let output = fx.login_company("a@acme.com", "ab").await.unwrap();
    assert_eq!(output.company.company_id, company.company_id);

    let claims = fx.tokens.verify(&output.token).unwrap();
    assert_eq!(claims.role, AccountRole::Company);
    assert_eq!(claims.sub, company.company_id.into_uuid());
    assert_eq!(claims.email, "a@acme.com");
    assert_eq!(claims.name, "Acme");
}

#[tokio::test]
async fn test_employee_register_login_roundtrip() {
    let fx = fixture();

    let employee = fx
        .register_employee("John Doe", "john@example.com", "secret12")
        .await
        .unwrap();

    let output = fx.login_employee("john@example.com", "secret12").await.unwrap();
    assert_eq!(output.employee.employee_id, employee.employee_id);
    assert_eq!(output.roles, vec!["employee"]);

    let claims = fx.tokens.verify(&output.token).unwrap();
    assert_eq!(claims.role, AccountRole::Employee);
    assert_eq!(claims.sub, employee.employee_id.into_uuid());
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let fx = fixture();
    fx.register_company("Acme", "A@Acme.com", "passw0rd").await.unwrap();

    assert!(fx.login_company("a@acme.com", "passw0rd").await.is_ok());
}

// ============================================================================
// Duplicate email
// ============================================================================

#[tokio::test]
async fn test_duplicate_email_same_role_rejected() {
    let fx = fixture();
    fx.register_company("Acme", "a@acme.com", "passw0rd").await.unwrap();

    let result = fx.register_company("Other", "a@acme.com", "different").await;
    assert!(matches!(result, Err(AccountError::DuplicateEmail)));
    assert_eq!(fx.repo.company_count(), 1);
}

#[tokio::test]
async fn test_duplicate_email_across_roles_rejected() {
    let fx = fixture();
    fx.register_company("Acme", "shared@example.com", "passw0rd")
        .await
        .unwrap();

    // Same email as an employee: one identity per email, period
    let result = fx
        .register_employee("John Doe", "shared@example.com", "passw0rd")
        .await;
    assert!(matches!(result, Err(AccountError::DuplicateEmail)));

    // No partial rows
    assert_eq!(fx.repo.company_count(), 1);
    assert_eq!(fx.repo.employee_count(), 0);
}

// ============================================================================
// Credential failure indistinguishability
// ============================================================================

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let fx = fixture();
    fx.register_company("Acme", "a@acme.com", "correct1").await.unwrap();

    let unknown_email = fx.login_company("nobody@acme.com", "correct1").await.unwrap_err();
    let wrong_password = fx.login_company("a@acme.com", "wrong111").await.unwrap_err();

    assert!(matches!(unknown_email, AccountError::InvalidCredentials));
    assert!(matches!(wrong_password, AccountError::InvalidCredentials));

    // Same message, same status - nothing to tell apart from outside
    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    assert_eq!(unknown_email.kind(), wrong_password.kind());
}

#[tokio::test]
async fn test_wrong_role_login_is_invalid_credentials() {
    let fx = fixture();
    fx.register_employee("John Doe", "john@example.com", "passw0rd")
        .await
        .unwrap();

    // An employee account on the company login route must not reveal
    // that the email exists with another role
    let result = fx.login_company("john@example.com", "passw0rd").await;
    assert!(matches!(result, Err(AccountError::InvalidCredentials)));
}

// ============================================================================
// Profile drift
// ============================================================================

#[tokio::test]
async fn test_identity_without_profile_fails_closed() {
    let fx = fixture();

    let email = Email::new("ghost@example.com").unwrap();
    let raw = RawPassword::new("passw0rd".to_string(), &fx.config.password_policy).unwrap();
    let digest = PasswordDigest::from_raw(&raw).unwrap();
    fx.repo
        .insert_identity_only(Identity::new(email, digest, AccountRole::Company));

    // Valid credentials, but no company row: no token may be issued
    let result = fx.login_company("ghost@example.com", "passw0rd").await;
    assert!(matches!(result, Err(AccountError::ProfileMissing)));
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_validation_lists_all_offending_fields() {
    let fx = fixture();

    let result = fx.register_company("   ", "not-an-email", "").await;
    let Err(AccountError::Validation(violations)) = result else {
        panic!("expected validation error");
    };

    let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));
    assert_eq!(fx.repo.company_count(), 0);
}

// ============================================================================
// Bootstrap
// ============================================================================

#[tokio::test]
async fn test_bootstrap_is_idempotent() {
    let fx = fixture();
    let bootstrap_config = BootstrapConfig::development();

    let use_case =
        BootstrapAdminUseCase::new(fx.repo.clone(), fx.repo.clone(), fx.config.clone());

    use_case.execute(&bootstrap_config).await.unwrap();
    use_case.execute(&bootstrap_config).await.unwrap();

    assert_eq!(fx.repo.company_count(), 1);

    // The admin can sign in as a regular company account
    let output = fx
        .login_company(&bootstrap_config.admin_email, &bootstrap_config.admin_password)
        .await
        .unwrap();
    let claims = fx.tokens.verify(&output.token).unwrap();
    assert_eq!(claims.role, AccountRole::Company);
}
