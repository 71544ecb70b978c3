//! Blog Service
//!
//! Existence-checked create and list operations for blog posts.

use std::sync::Arc;

use accounts::domain::repository::{CompanyRepository, EmployeeRepository};
use accounts::models::ids::{CompanyId, EmployeeId};

use crate::domain::entity::blog::{Blog, BlogAuthor};
use crate::domain::repository::BlogRepository;
use crate::error::{CommunityError, CommunityResult};

/// Blog service
pub struct BlogService<P, B>
where
    P: CompanyRepository + EmployeeRepository,
    B: BlogRepository,
{
    profiles: Arc<P>,
    blog_repo: Arc<B>,
}

impl<P, B> BlogService<P, B>
where
    P: CompanyRepository + EmployeeRepository,
    B: BlogRepository,
{
    pub fn new(profiles: Arc<P>, blog_repo: Arc<B>) -> Self {
        Self {
            profiles,
            blog_repo,
        }
    }

    /// Create a blog post under a company
    pub async fn create_for_company(
        &self,
        company_id: CompanyId,
        title: String,
        content: String,
    ) -> CommunityResult<Blog> {
        if !CompanyRepository::exists_by_id(self.profiles.as_ref(), &company_id).await? {
            return Err(CommunityError::CompanyNotFound);
        }

        self.create(title, content, BlogAuthor::Company(company_id))
            .await
    }

    /// Create a blog post under an employee
    pub async fn create_for_employee(
        &self,
        employee_id: EmployeeId,
        title: String,
        content: String,
    ) -> CommunityResult<Blog> {
        if !EmployeeRepository::exists_by_id(self.profiles.as_ref(), &employee_id).await? {
            return Err(CommunityError::EmployeeNotFound);
        }

        self.create(title, content, BlogAuthor::Employee(employee_id))
            .await
    }

    /// List a company's blog posts
    pub async fn list_for_company(&self, company_id: &CompanyId) -> CommunityResult<Vec<Blog>> {
        if !CompanyRepository::exists_by_id(self.profiles.as_ref(), company_id).await? {
            return Err(CommunityError::CompanyNotFound);
        }

        self.blog_repo.list_by_company(company_id).await
    }

    /// List an employee's blog posts
    pub async fn list_for_employee(&self, employee_id: &EmployeeId) -> CommunityResult<Vec<Blog>> {
        if !EmployeeRepository::exists_by_id(self.profiles.as_ref(), employee_id).await? {
            return Err(CommunityError::EmployeeNotFound);
        }

        self.blog_repo.list_by_employee(employee_id).await
    }

    async fn create(
        &self,
        title: String,
        content: String,
        author: BlogAuthor,
    ) -> CommunityResult<Blog> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(CommunityError::Validation(
                "title must not be empty".to_string(),
            ));
        }

        let blog = Blog::new(title, content, author);
        self.blog_repo.create(&blog).await?;

        tracing::info!(blog_id = %blog.blog_id, "Blog created");

        Ok(blog)
    }
}
