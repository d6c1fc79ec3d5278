//! Zettel core data models.
//!
//! This crate defines the archive hierarchy (areas, projects, sections,
//! tasks), the traversal every report is built on, and the statistics
//! roll-up across that hierarchy. It performs no I/O.

#![warn(missing_docs)]

// Hierarchy
mod node;
mod tree;

// Aggregation
mod stats;

// Re-exports
pub use node::{Node, NodeKind, ProjectFlags};
pub use tree::{collect, count, traverse, Attribute, Criteria, Tree};
pub use stats::{area_stats, compute_stats, project_stats, StatsRecord};
