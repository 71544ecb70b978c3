//! Identity Entity
//!
//! Credential record for a registered actor, separate from the domain
//! profile (Company or Employee). One identity per email; the role is
//! assigned at creation and never changes.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    account_role::AccountRole,
    credentials::{PasswordDigest, RawPassword},
    email::Email,
    ids::IdentityId,
};

/// Identity entity
///
/// Contains the sensitive credential data. Linked to its profile by
/// email; the two rows are inserted in one transaction at registration.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Internal UUID identifier
    pub identity_id: IdentityId,
    /// Unique login email (stored lowercase)
    pub email: Email,
    /// Argon2id password hash
    pub password: PasswordDigest,
    /// Role assigned at registration, immutable afterwards
    pub role: AccountRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new identity
    pub fn new(email: Email, password: PasswordDigest, role: AccountRole) -> Self {
        Self {
            identity_id: IdentityId::new(),
            email,
            password,
            role,
            created_at: Utc::now(),
        }
    }

    /// Verify a login password attempt
    pub fn verify_password(&self, raw: &RawPassword) -> bool {
        self.password.verify(raw)
    }
}
