//! Domain Layer
//!
//! Contains entities, value objects, repository and storage ports.

pub mod document_store;
pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use document_store::{DocumentStore, StoredDocument};
pub use entity::{
    application::{Application, ApplicationSummary},
    job::Job,
};
pub use repository::{ApplicationRepository, JobRepository};
