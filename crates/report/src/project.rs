//! Project zettels.

use tracing::debug;
use zettel_core::{traverse, Criteria, Node, NodeKind};
use zettel_progress::BarSize;

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::filename;
use crate::markdown::ZettelDocument;
use crate::segments::SegmentList;

/// Builds the overview zettel of a single project.
pub struct ProjectReport<'a> {
    config: &'a ReportConfig,
}

impl<'a> ProjectReport<'a> {
    /// Create a builder.
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Assemble the zettel for `project`.
    ///
    /// Every project node in the tree (spliced links included) gets a heading,
    /// its stats and a bar. Each top-level section then gets a segment list of
    /// itself and its deeper sections.
    pub fn build(&self, project: &Node) -> Result<ZettelDocument> {
        if project.kind != NodeKind::Project {
            return Err(ReportError::NotAProject {
                name: project.name.clone(),
                kind: project.kind.to_string(),
            });
        }

        let base = filename::project_node_base_name(project, &self.config.projects_root);
        let mut doc = ZettelDocument::new(filename::markdown(&base), self.config.date, &self.config.tags);

        traverse(&Criteria::kind(NodeKind::Project), project, &mut |node| {
            doc.push_heading(node.name.as_str(), 1);
            if let Some(description) = &node.description {
                doc.push_description(description);
            }
            let stats = node.stats();
            doc.push_stats(&stats);
            doc.push_progress_bar(BarSize::Standard, stats);
        });

        let top_level = Criteria::kind(NodeKind::Section);
        traverse(&top_level, project, &mut |section| {
            if section.level != 1 {
                return;
            }

            let mut list = SegmentList::new();
            list.push(section.level + 1, section.name.as_str(), section.stats());
            traverse(&Criteria::kind(NodeKind::Section), section, &mut |sub| {
                if sub.level >= 2 {
                    list.push(sub.level + 1, sub.name.as_str(), sub.stats());
                }
            });

            debug!("Section {} with {} entries", section.name, list.entries().len());
            doc.push_html(list.render());
        });

        Ok(doc)
    }
}
