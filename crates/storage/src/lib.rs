//! Storage for the zettel tools.
//!
//! Loads the JSON archive into a node tree and writes rendered zettels.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod zettel_dir;

pub use trait_::{ArchiveSource, Result, StorageError, ZettelSink};
pub use json_storage::{JsonArchive, DEFAULT_IGNORE, INFO_FILE};
pub use zettel_dir::{MemorySink, ZettelDir};
