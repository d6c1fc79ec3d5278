//! Zettel report assembly.
//!
//! Builds project, area and archive-wide overview zettels from a node tree
//! and writes them through a [`zettel_storage::ZettelSink`].

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod filename;
pub mod markdown;
pub mod segments;

pub mod area;
pub mod links;
pub mod overview;
pub mod project;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use markdown::{Block, ZettelDocument};
pub use segments::{SegmentEntry, SegmentList};

pub use area::AreaReport;
pub use links::{active_sprints, find_project, resolve_links};
pub use overview::ArchiveOverview;
pub use project::ProjectReport;

use std::path::PathBuf;
use zettel_storage::ZettelSink;

/// Write every document to `sink`, in order.
pub async fn publish_all(docs: &[ZettelDocument], sink: &dyn ZettelSink) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(docs.len());
    for doc in docs {
        written.push(doc.publish(sink).await?);
    }
    Ok(written)
}
