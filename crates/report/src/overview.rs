//! The archive-wide overview zettel.

use zettel_core::Node;
use zettel_progress::{render_html, BarSize, ProgressBar};

use crate::config::ReportConfig;
use crate::filename;
use crate::markdown::{Block, ZettelDocument};

/// Builds `project-overview-all`: every area as a heading, every project as
/// a name with a small bar.
pub struct ArchiveOverview<'a> {
    config: &'a ReportConfig,
}

impl<'a> ArchiveOverview<'a> {
    /// Create a builder.
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Assemble the overview for the area tree under `root`.
    pub fn build(&self, root: &Node) -> ZettelDocument {
        let mut doc = ZettelDocument::new(
            filename::markdown(filename::OVERVIEW_BASE_NAME),
            self.config.date,
            &self.config.tags,
        );
        Self::add_area(&mut doc, root, 1);
        doc
    }

    fn add_area(doc: &mut ZettelDocument, area: &Node, level: u8) {
        let text = if level == 1 {
            format!("{} – Overview", area.name)
        } else {
            area.name.clone()
        };
        doc.push(Block::Heading {
            level: level.min(6),
            text,
        });

        for project in &area.projects {
            doc.push_html(project_item(project));
        }

        for child in &area.areas {
            Self::add_area(doc, child, level.saturating_add(1));
        }
    }
}

fn project_item(project: &Node) -> String {
    let bar = ProgressBar::layout(BarSize::Small, &project.stats());
    format!(
        "<span class=\"text\" style=\"font-weight: bold\">{}</span>\n{}",
        project.name,
        render_html(&bar)
    )
}
