//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{company::Company, employee::Employee, identity::Identity};
use crate::domain::value_object::{
    email::Email,
    ids::{CompanyId, EmployeeId},
};
use crate::error::AccountResult;

/// Identity (credential store) repository trait
#[trait_variant::make(IdentityRepository: Send)]
pub trait LocalIdentityRepository {
    /// Find an identity by its (lowercased) email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Identity>>;
}

/// Company repository trait
#[trait_variant::make(CompanyRepository: Send)]
pub trait LocalCompanyRepository {
    /// Persist identity and company profile atomically.
    ///
    /// Both rows are inserted in one transaction; a unique violation on
    /// the email maps to `DuplicateEmail`. The store's uniqueness
    /// constraint is the authoritative gate, not any pre-check.
    async fn create_with_identity(
        &self,
        identity: &Identity,
        company: &Company,
    ) -> AccountResult<()>;

    /// Find company by ID
    async fn find_by_id(&self, company_id: &CompanyId) -> AccountResult<Option<Company>>;

    /// Find company by email (profile resolution at login)
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Company>>;

    /// List all companies
    async fn list(&self) -> AccountResult<Vec<Company>>;

    /// List companies in an industry
    async fn list_by_industry(&self, industry: &str) -> AccountResult<Vec<Company>>;

    /// Check if a company exists
    async fn exists_by_id(&self, company_id: &CompanyId) -> AccountResult<bool>;
}

/// Employee repository trait
#[trait_variant::make(EmployeeRepository: Send)]
pub trait LocalEmployeeRepository {
    /// Persist identity and employee profile atomically (see
    /// `CompanyRepository::create_with_identity`).
    async fn create_with_identity(
        &self,
        identity: &Identity,
        employee: &Employee,
    ) -> AccountResult<()>;

    /// Find employee by ID
    async fn find_by_id(&self, employee_id: &EmployeeId) -> AccountResult<Option<Employee>>;

    /// Find employee by email (profile resolution at login)
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Employee>>;

    /// Case-insensitive name substring search
    async fn search_by_name(&self, name: &str) -> AccountResult<Vec<Employee>>;

    /// Check if an employee exists
    async fn exists_by_id(&self, employee_id: &EmployeeId) -> AccountResult<bool>;
}
