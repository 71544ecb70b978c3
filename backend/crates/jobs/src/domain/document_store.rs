//! Document Store Port
//!
//! Stable storage for application documents. Lives beside the repository
//! traits because the submission workflow treats it as a second
//! persistence resource: the database and the store cannot share one
//! atomic commit, so the workflow owns the compensating action.

use crate::error::JobsResult;

/// Handle to a stored document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    /// Storage path, relative to the store root
    pub path: String,
}

/// Document storage trait
#[trait_variant::make(DocumentStore: Send)]
pub trait LocalDocumentStore {
    /// Persist document bytes under a collision-resistant generated name.
    ///
    /// The client-supplied name is advisory only; implementations must
    /// never use it as a path.
    async fn save(&self, original_name: Option<&str>, bytes: &[u8]) -> JobsResult<StoredDocument>;

    /// Delete a stored document (compensating action)
    async fn delete(&self, path: &str) -> JobsResult<()>;
}
