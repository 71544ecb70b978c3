//! Application Layer
//!
//! Use cases and application services.

pub mod application_queries;
pub mod config;
pub mod job_queries;
pub mod post_job;
pub mod submit_application;

// Re-exports
pub use application_queries::ApplicationQueries;
pub use config::StorageConfig;
pub use job_queries::JobQueries;
pub use post_job::{PostJobInput, PostJobUseCase};
pub use submit_application::{SubmitApplicationInput, SubmitApplicationUseCase};
