//! Employee Entity
//!
//! Candidate-side actor profile. Referenced by applications, blogs and
//! reviews, but does not own them exclusively.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, ids::EmployeeId};

/// Employee profile entity
#[derive(Debug, Clone)]
pub struct Employee {
    /// Employee identifier, the token subject for employee logins
    pub employee_id: EmployeeId,
    /// Full display name
    pub full_name: String,
    /// Contact email, matches the identity email
    pub email: Email,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Create a new employee profile
    pub fn new(full_name: String, email: Email) -> Self {
        Self {
            employee_id: EmployeeId::new(),
            full_name,
            email,
            created_at: Utc::now(),
        }
    }
}
