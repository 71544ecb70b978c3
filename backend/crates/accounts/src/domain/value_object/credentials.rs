//! Credential Value Objects
//!
//! Domain wrappers around `platform::password`. `RawPassword` is validated
//! user input (zeroized on drop); `PasswordDigest` is the Argon2id hash
//! that gets persisted.

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicy, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped. Validation is driven by
/// the configured [`PasswordPolicy`] - the policy knob, not this type,
/// decides how weak a password may be.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password, validated against the given policy
    pub fn new(raw: String, policy: &PasswordPolicy) -> Result<Self, PasswordPolicyError> {
        Ok(Self(ClearTextPassword::new(raw, policy)?))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password Digest (Hashed, for storage)
// ============================================================================

/// Hashed password for database storage (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(HashedPassword);

impl PasswordDigest {
    /// Create from raw password by hashing
    pub fn from_raw(raw: &RawPassword) -> Result<Self, PasswordHashError> {
        Ok(Self(raw.inner().hash()?))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> Result<Self, PasswordHashError> {
        Ok(Self(HashedPassword::from_phc_string(phc_string)?))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this digest
    ///
    /// Constant-time comparison; never logs the candidate.
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}
