//! Infrastructure Layer
//!
//! Database and filesystem implementations.

pub mod fs_store;
pub mod postgres;

pub use fs_store::FsDocumentStore;
pub use postgres::PgJobsRepository;
