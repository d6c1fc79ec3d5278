//! Report errors.

use zettel_storage::StorageError;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while assembling or publishing zettels.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Loading or writing failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A project report was asked for a node of another kind
    #[error("{name} is a {kind}, not a project")]
    NotAProject {
        /// Node name
        name: String,
        /// Actual kind
        kind: String,
    },
}
