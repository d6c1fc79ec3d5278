//! Storage trait abstraction.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use zettel_core::Node;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error in {path}: {source}")]
    Json {
        /// File being parsed
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// Invalid ignore pattern
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Source of archive trees.
#[async_trait]
pub trait ArchiveSource: Send + Sync {
    /// Load a single project file.
    async fn load_project(&self, path: &Path) -> Result<Node>;

    /// Walk the whole archive into a root area.
    async fn load_area_tree(&self) -> Result<Node>;
}

/// Destination for rendered zettels.
#[async_trait]
pub trait ZettelSink: Send + Sync {
    /// Write one zettel, returning where it went.
    async fn write_zettel(&self, filename: &str, contents: &str) -> Result<PathBuf>;
}
