//! Application Configuration
//!
//! Configuration for the jobs application layer.

use std::path::PathBuf;

/// Document storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root directory for stored documents
    pub root: PathBuf,
}

impl StorageConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create config for development (relative local directory)
    pub fn development() -> Self {
        Self {
            root: PathBuf::from("storage/documents"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_root() {
        let config = StorageConfig::development();
        assert_eq!(config.root, PathBuf::from("storage/documents"));
    }
}
