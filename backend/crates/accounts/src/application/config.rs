//! Application Configuration
//!
//! Configuration for the accounts application layer.

use std::time::Duration;

/// Re-export the password policy knob from platform
pub use platform::password::PasswordPolicy;

/// Token signing configuration
///
/// The secret is process-wide and loaded once at startup. Rotating it
/// invalidates every outstanding token; expiry is the only other
/// invalidation mechanism (no revocation list).
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC signing secret (32 bytes recommended)
    pub secret: Vec<u8>,
    /// Token lifetime
    pub ttl: Duration,
}

impl TokenConfig {
    /// Default token lifetime (24 hours)
    pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 3600);

    pub fn new(secret: Vec<u8>, ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    /// Create config with a random secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            secret: platform::crypto::random_bytes(32),
            ttl: Self::DEFAULT_TTL,
        }
    }

    /// Get the TTL in whole seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.as_secs() as i64
    }
}

/// Accounts application configuration
#[derive(Debug, Clone)]
pub struct AccountsConfig {
    /// Token signing configuration
    pub token: TokenConfig,
    /// Password validation policy (permissive by default)
    pub password_policy: PasswordPolicy,
}

impl AccountsConfig {
    pub fn new(token: TokenConfig, password_policy: PasswordPolicy) -> Self {
        Self {
            token,
            password_policy,
        }
    }

    /// Create config for development (random secret, default policy)
    pub fn development() -> Self {
        Self {
            token: TokenConfig::with_random_secret(),
            password_policy: PasswordPolicy::default(),
        }
    }
}
