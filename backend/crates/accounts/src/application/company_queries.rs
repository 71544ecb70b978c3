//! Company Query Service
//!
//! Read-side operations over company profiles.

use std::sync::Arc;

use crate::domain::entity::company::Company;
use crate::domain::repository::CompanyRepository;
use crate::domain::value_object::ids::CompanyId;
use crate::error::{AccountError, AccountResult};

/// Company queries
pub struct CompanyQueries<C>
where
    C: CompanyRepository,
{
    company_repo: Arc<C>,
}

impl<C> CompanyQueries<C>
where
    C: CompanyRepository,
{
    pub fn new(company_repo: Arc<C>) -> Self {
        Self { company_repo }
    }

    /// List all companies
    pub async fn list(&self) -> AccountResult<Vec<Company>> {
        self.company_repo.list().await
    }

    /// Get a company by id
    pub async fn by_id(&self, company_id: &CompanyId) -> AccountResult<Company> {
        self.company_repo
            .find_by_id(company_id)
            .await?
            .ok_or(AccountError::CompanyNotFound)
    }

    /// List companies in an industry
    pub async fn by_industry(&self, industry: &str) -> AccountResult<Vec<Company>> {
        self.company_repo.list_by_industry(industry).await
    }
}
