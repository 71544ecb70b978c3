//! Community Backend Module
//!
//! Blogs and reviews connecting companies and employees.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Blog and review services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! All writes are existence-checked against the referenced company or
//! employee profile; beyond that these are plain create/list operations.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{CommunityError, CommunityResult};
pub use infra::postgres::PgCommunityRepository;
pub use presentation::router::community_router;
