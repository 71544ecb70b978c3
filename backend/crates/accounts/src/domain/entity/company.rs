//! Company Entity
//!
//! Business-side actor profile. Owns jobs, blogs and reviews
//! (one-to-many, enforced by the schema).

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, ids::CompanyId};

/// Company profile entity
#[derive(Debug, Clone)]
pub struct Company {
    /// Company identifier, the token subject for company logins
    pub company_id: CompanyId,
    /// Display name
    pub name: String,
    /// Industry label, used for category filtering
    pub industry: String,
    /// Contact email, matches the identity email
    pub email: Email,
    /// Optional free-text description
    pub description: Option<String>,
    /// Optional logo URL
    pub logo_url: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// Create a new company profile
    pub fn new(
        name: String,
        industry: String,
        email: Email,
        description: Option<String>,
        logo_url: Option<String>,
    ) -> Self {
        Self {
            company_id: CompanyId::new(),
            name,
            industry,
            email,
            description,
            logo_url,
            created_at: Utc::now(),
        }
    }
}
