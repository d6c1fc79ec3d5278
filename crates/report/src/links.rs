//! Sprint link resolution.
//!
//! A sprint project can reference other projects through `link` tasks. For a
//! sprint zettel the referenced projects are copied into the section holding
//! the link, so their sections and tasks show up (and count) there.

use tracing::{debug, warn};
use zettel_core::{Node, NodeKind};

/// Tag marking an active project.
pub const ACTIVE_TAG: &str = "#active";

/// Tag marking a sprint.
pub const SPRINT_TAG: &str = "#sprint";

/// Projects tagged both active and sprint, depth first: an area's own
/// projects before those of its sub-areas.
pub fn active_sprints(area: &Node) -> Vec<&Node> {
    let mut found = Vec::new();
    collect_sprints(area, &mut found);
    found
}

fn collect_sprints<'a>(area: &'a Node, found: &mut Vec<&'a Node>) {
    found.extend(
        area.projects
            .iter()
            .filter(|p| p.is_tagged(ACTIVE_TAG) && p.is_tagged(SPRINT_TAG)),
    );
    for child in &area.areas {
        collect_sprints(child, found);
    }
}

/// First project called `name`, checking an area's own projects before
/// descending into its sub-areas.
pub fn find_project<'a>(area: &'a Node, name: &str) -> Option<&'a Node> {
    area.projects
        .iter()
        .find(|p| p.name == name)
        .or_else(|| area.areas.iter().find_map(|child| find_project(child, name)))
}

/// Splice linked projects of `sprint` into its sections.
///
/// Returns how many links were resolved. Unknown targets are skipped.
/// Spliced copies are searched for further links; a link back to a project
/// already on the current chain is skipped. Cached stats on the sprint are
/// cleared so the next read reflects the new shape.
pub fn resolve_links(sprint: &mut Node, archive: &Node) -> usize {
    let mut chain = vec![sprint.name.clone()];
    let mut resolved = 0;
    for section in &mut sprint.sections {
        resolved += resolve_section(section, archive, &mut chain);
    }
    sprint.clear_subtree_stats();
    resolved
}

fn resolve_section(section: &mut Node, archive: &Node, chain: &mut Vec<String>) -> usize {
    let existing = section.sections.len();
    let mut resolved = 0;

    let targets: Vec<String> = section
        .tasks
        .iter()
        .filter(|t| t.kind == NodeKind::Link)
        .map(|t| t.project.clone().unwrap_or_else(|| t.name.clone()))
        .collect();

    for target in targets {
        if chain.contains(&target) {
            warn!("Cyclic link to {} in {}, skipped", target, section.name);
            continue;
        }
        match find_project(archive, &target) {
            Some(project) => {
                debug!("Linking {} into {}", target, section.name);
                section.sections.push(project.clone());
                resolved += 1;
            }
            None => warn!("Linked project not found: {}", target),
        }
    }

    for (i, sub) in section.sections.iter_mut().enumerate() {
        if i < existing {
            resolved += resolve_section(sub, archive, chain);
        } else {
            chain.push(sub.name.clone());
            resolved += resolve_section(sub, archive, chain);
            chain.pop();
        }
    }

    resolved
}
