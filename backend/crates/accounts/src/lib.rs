//! Accounts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Company and employee registration with email + password
//! - Stateless bearer-token authentication (signed JWT with expiry)
//! - Role-based access (Company, Employee)
//! - Company listing/search and employee search
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored or logged in plaintext
//! - Identity and profile created in one database transaction
//! - Login failures are indistinguishable (unknown email vs wrong password)
//! - Token role claim checked by per-route middleware (401 vs 403)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AccountsConfig;
pub use application::token::{Claims, TokenService};
pub use error::{AccountError, AccountResult};
pub use infra::postgres::PgAccountsRepository;
pub use presentation::router::accounts_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAccountsRepository as AccountsStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
