//! Area zettels: one per area, listing its sub-areas and projects.

use zettel_core::{traverse, Criteria, Node, NodeKind};

use crate::config::ReportConfig;
use crate::filename;
use crate::markdown::ZettelDocument;
use crate::segments::SegmentList;

/// Builds area overview zettels.
pub struct AreaReport<'a> {
    config: &'a ReportConfig,
}

impl<'a> AreaReport<'a> {
    /// Create a builder.
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// One zettel for every area in `root`, in traversal order.
    pub fn build_all(&self, root: &Node) -> Vec<ZettelDocument> {
        let mut docs = Vec::new();
        traverse(&Criteria::kind(NodeKind::Area), root, &mut |area| {
            docs.push(self.build(area));
        });
        docs
    }

    /// The zettel for a single area.
    pub fn build(&self, area: &Node) -> ZettelDocument {
        let base = filename::area_node_base_name(area, &self.config.archive_root);
        let mut doc = ZettelDocument::new(filename::markdown(&base), self.config.date, &self.config.tags);

        doc.push_heading(area.name.as_str(), 1);
        doc.push_heading("Pinned", 2);

        let mut areas = SegmentList::new();
        for child in &area.areas {
            areas.push(2, format!("📁 {}", self.area_link(child)), child.stats());
        }
        if !areas.is_empty() {
            doc.push_html(areas.render());
        }

        let mut projects = SegmentList::new();
        for project in &area.projects {
            projects.push(2, format!("📄 {}", self.project_link(project)), project.stats());
        }
        if !projects.is_empty() {
            doc.push_html(projects.render());
        }

        doc
    }

    fn area_link(&self, area: &Node) -> String {
        let base = filename::area_node_base_name(area, &self.config.archive_root);
        format!(r#"<a href="{}">{}</a>"#, filename::html(&base), area.name)
    }

    fn project_link(&self, project: &Node) -> String {
        let base = filename::project_node_base_name(project, &self.config.projects_root);
        format!(r#"<a href="{}">{}</a>"#, filename::html(&base), project.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::Block;
    use std::path::PathBuf;

    fn archive() -> Node {
        let mut payroll = Node::project("Payroll").with_task(Node::task("run").done());
        payroll.json_file = Some(PathBuf::from("/archive/projects/work/payroll.json"));

        let mut work = Node::area("Work").with_project(payroll);
        work.path = Some(PathBuf::from("/archive/projects/work"));

        let mut root = Node::root_area("Projects")
            .with_area(work)
            .with_project(Node::project("Inbox").with_task(Node::task("sort")));
        root.path = Some(PathBuf::from("/archive/projects"));
        root
    }

    #[test]
    fn test_one_zettel_per_area() {
        let config = ReportConfig::default().with_archive_root("/archive");
        let root = archive();
        let docs = AreaReport::new(&config).build_all(&root);

        let names: Vec<&str> = docs.iter().map(|d| d.filename()).collect();
        assert_eq!(names, vec!["area-projects.md", "area-projects-work.md"]);
    }

    #[test]
    fn test_root_zettel_lists_children() {
        let config = ReportConfig::default().with_archive_root("/archive");
        let root = archive();
        let doc = AreaReport::new(&config).build(&root);

        assert!(matches!(&doc.blocks()[1], Block::Heading { level: 1, text } if text == "Projects"));
        assert!(matches!(&doc.blocks()[2], Block::BlockHeader { level: 2, text } if text == "Pinned"));

        let md = doc.to_markdown();
        assert!(md.contains(r#"📁 <a href="area-projects-work.html">Work</a>"#));
        assert!(md.contains(r#"📄 <a href="projects-inbox-overview.html">Inbox</a>"#));
        // Work holds one done task out of one.
        assert!(md.contains(r#"data-percent="100""#));
    }

    #[test]
    fn test_leaf_area_has_no_segments() {
        let config = ReportConfig::default().with_archive_root("/archive");
        let doc = AreaReport::new(&config).build(&Node::area("Empty"));
        assert_eq!(doc.blocks().len(), 3);
        assert_eq!(doc.filename(), "area-empty.md");
    }
}
