//! Blog Entity
//!
//! A post authored by either a company or an employee.

use chrono::{DateTime, Utc};

use accounts::models::ids::{CompanyId, EmployeeId};

use crate::domain::value_object::ids::BlogId;

/// Blog author: exactly one of the two actor kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogAuthor {
    Company(CompanyId),
    Employee(EmployeeId),
}

impl BlogAuthor {
    pub fn company_id(&self) -> Option<&CompanyId> {
        match self {
            BlogAuthor::Company(id) => Some(id),
            BlogAuthor::Employee(_) => None,
        }
    }

    pub fn employee_id(&self) -> Option<&EmployeeId> {
        match self {
            BlogAuthor::Company(_) => None,
            BlogAuthor::Employee(id) => Some(id),
        }
    }
}

/// Blog entity
#[derive(Debug, Clone)]
pub struct Blog {
    /// Blog identifier
    pub blog_id: BlogId,
    /// Title
    pub title: String,
    /// Body content
    pub content: String,
    /// Authoring actor
    pub author: BlogAuthor,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog post
    pub fn new(title: String, content: String, author: BlogAuthor) -> Self {
        Self {
            blog_id: BlogId::new(),
            title,
            content,
            author,
            created_at: Utc::now(),
        }
    }
}
