//! Filesystem Document Store
//!
//! Persists application documents under a configured root directory.
//! Stored names are `{uuid}_{sanitized original name}`: collision
//! resistant, and the client-supplied name is reduced to its final path
//! component so it can never traverse outside the root.

use std::path::Path;

use uuid::Uuid;

use crate::application::config::StorageConfig;
use crate::domain::document_store::{DocumentStore, StoredDocument};
use crate::error::{JobsError, JobsResult};

/// Filesystem-backed document store
#[derive(Clone)]
pub struct FsDocumentStore {
    config: StorageConfig,
}

impl FsDocumentStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Reduce a client-supplied filename to a safe final component
    fn sanitize(original: &str) -> &str {
        let name = original.rsplit(['/', '\\']).next().unwrap_or("");
        if name.is_empty() || name == "." || name == ".." {
            "document"
        } else {
            name
        }
    }

    /// Generate a collision-resistant stored name
    fn stored_name(original: Option<&str>) -> String {
        let suffix = original.map(Self::sanitize).unwrap_or("document");
        format!("{}_{}", Uuid::new_v4(), suffix)
    }
}

impl DocumentStore for FsDocumentStore {
    async fn save(&self, original_name: Option<&str>, bytes: &[u8]) -> JobsResult<StoredDocument> {
        tokio::fs::create_dir_all(&self.config.root)
            .await
            .map_err(|e| JobsError::Storage(e.to_string()))?;

        let name = Self::stored_name(original_name);
        let path = self.config.root.join(&name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| JobsError::Storage(e.to_string()))?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Document stored");

        Ok(StoredDocument { path: name })
    }

    async fn delete(&self, path: &str) -> JobsResult<()> {
        // The handle we issued is a bare name, never a path
        let name = Path::new(path)
            .file_name()
            .ok_or_else(|| JobsError::Storage(format!("Invalid document handle: {path}")))?;

        tokio::fs::remove_file(self.config.root.join(name))
            .await
            .map_err(|e| JobsError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> FsDocumentStore {
        let root = std::env::temp_dir().join(format!("jobs-docs-{}", Uuid::new_v4()));
        FsDocumentStore::new(StorageConfig::new(root))
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(FsDocumentStore::sanitize("resume.pdf"), "resume.pdf");
        assert_eq!(FsDocumentStore::sanitize("../../etc/passwd"), "passwd");
        assert_eq!(FsDocumentStore::sanitize("a/b/c.pdf"), "c.pdf");
        assert_eq!(FsDocumentStore::sanitize("..\\evil.exe"), "evil.exe");
        assert_eq!(FsDocumentStore::sanitize(""), "document");
        assert_eq!(FsDocumentStore::sanitize(".."), "document");
        assert_eq!(FsDocumentStore::sanitize("dir/"), "document");
    }

    #[test]
    fn test_stored_names_are_unique() {
        let a = FsDocumentStore::stored_name(Some("resume.pdf"));
        let b = FsDocumentStore::stored_name(Some("resume.pdf"));
        assert_ne!(a, b);
        assert!(a.ends_with("_resume.pdf"));
    }

    #[tokio::test]
    async fn test_save_and_delete_roundtrip() {
        let store = temp_store();

        let stored = store
            .save(Some("resume.pdf"), b"application document")
            .await
            .unwrap();

        let on_disk = store.config.root.join(&stored.path);
        assert_eq!(
            tokio::fs::read(&on_disk).await.unwrap(),
            b"application document"
        );

        store.delete(&stored.path).await.unwrap();
        assert!(!on_disk.exists());
    }

    #[tokio::test]
    async fn test_save_without_name_uses_placeholder() {
        let store = temp_store();

        let stored = store.save(None, b"bytes").await.unwrap();
        assert!(stored.path.ends_with("_document"));

        store.delete(&stored.path).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_file_errors() {
        let store = temp_store();
        store.save(Some("seed.txt"), b"x").await.unwrap();

        let result = store.delete("no-such-file").await;
        assert!(matches!(result, Err(JobsError::Storage(_))));
    }
}
