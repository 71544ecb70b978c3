//! Jobs Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and storage ports
//! - `application/` - Use cases and application services
//! - `infra/` - Database and filesystem implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Job postings owned by a company
//! - Employee job applications with an uploaded document
//! - Two-phase document persistence with compensating cleanup: no
//!   application row without a readable document, no orphaned document
//!   after a failed submission

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::StorageConfig;
pub use error::{JobsError, JobsResult};
pub use infra::fs_store::FsDocumentStore;
pub use infra::postgres::PgJobsRepository;
pub use presentation::router::jobs_router;
