//! Zettel file names derived from archive paths.

use std::path::Path;

use zettel_core::Node;

/// Name of the archive-wide overview zettel.
pub const OVERVIEW_BASE_NAME: &str = "project-overview-all";

fn relative_slug(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    parts.join("-").replace('.', "")
}

/// Lowercase, dash-separated form of a display name.
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// `projects-<path>-overview` for a project file under `projects_root`.
pub fn project_base_name(json_file: &Path, projects_root: &Path) -> String {
    let slug = relative_slug(json_file, projects_root).replacen("json", "", 1);
    format!("projects-{}-overview", slug)
}

/// `area-<path>` for an area directory under `archive_root`.
pub fn area_base_name(dir: &Path, archive_root: &Path) -> String {
    let slug = relative_slug(dir, archive_root);
    if slug.is_empty() {
        "area-root".to_string()
    } else {
        format!("area-{}", slug)
    }
}

/// Base name for a project node, from its source file or else its name.
pub fn project_node_base_name(project: &Node, projects_root: &Path) -> String {
    match &project.json_file {
        Some(file) => project_base_name(file, projects_root),
        None => format!("projects-{}-overview", slugify(&project.name)),
    }
}

/// Base name for an area node, from its directory or else its name.
pub fn area_node_base_name(area: &Node, archive_root: &Path) -> String {
    match &area.path {
        Some(dir) => area_base_name(dir, archive_root),
        None => format!("area-{}", slugify(&area.name)),
    }
}

/// Markdown file name.
pub fn markdown(base: &str) -> String {
    format!("{}.md", base)
}

/// HTML file name, as linked from other zettels.
pub fn html(base: &str) -> String {
    format!("{}.html", base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_base_name() {
        let root = Path::new("/home/me/archive/projects");
        assert_eq!(
            project_base_name(Path::new("/home/me/archive/projects/work/taxes.json"), root),
            "projects-work-taxes-overview"
        );
        assert_eq!(
            project_base_name(Path::new("/home/me/archive/projects/v1.2/notes.json"), root),
            "projects-v12-notes-overview"
        );
    }

    #[test]
    fn test_project_outside_root() {
        let name = project_base_name(Path::new("/tmp/x.json"), Path::new("/home/me/archive/projects"));
        assert_eq!(name, "projects-tmp-x-overview");
    }

    #[test]
    fn test_area_base_name() {
        let root = Path::new("/home/me/archive");
        assert_eq!(
            area_base_name(Path::new("/home/me/archive/projects/work"), root),
            "area-projects-work"
        );
        assert_eq!(area_base_name(root, root), "area-root");
    }

    #[test]
    fn test_node_fallbacks() {
        let root = Path::new("/archive");
        assert_eq!(
            project_node_base_name(&Node::project("Garden Plan 2.0"), root),
            "projects-garden-plan-2-0-overview"
        );
        assert_eq!(area_node_base_name(&Node::area("Home"), root), "area-home");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(markdown("a"), "a.md");
        assert_eq!(html("a"), "a.html");
    }
}
