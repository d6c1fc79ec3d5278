//! Report configuration.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Configuration shared by all report assemblers.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Base directory area zettel names are derived from
    pub archive_root: PathBuf,
    /// Directory walked for areas and projects; base for project zettel names
    pub projects_root: PathBuf,
    /// Where zettels are written
    pub zettel_dir: PathBuf,
    /// Date stamped into the front matter
    pub date: NaiveDate,
    /// Front-matter tags
    pub tags: Vec<String>,
    /// Regex patterns of paths skipped while walking
    pub ignore: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let archive_root = PathBuf::from("archive");
        Self {
            projects_root: archive_root.join("projects"),
            archive_root,
            zettel_dir: PathBuf::from("zettelkasten"),
            date: chrono::Local::now().date_naive(),
            tags: vec!["type/project-overview".to_string()],
            ignore: zettel_storage::DEFAULT_IGNORE
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl ReportConfig {
    /// Set the archive root. The projects root follows as `<root>/projects`.
    pub fn with_archive_root(mut self, root: impl AsRef<Path>) -> Self {
        self.archive_root = root.as_ref().to_path_buf();
        self.projects_root = self.archive_root.join("projects");
        self
    }

    /// Set the projects root.
    pub fn with_projects_root(mut self, root: impl AsRef<Path>) -> Self {
        self.projects_root = root.as_ref().to_path_buf();
        self
    }

    /// Set the output directory.
    pub fn with_zettel_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.zettel_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the front-matter date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Set the walk ignore patterns.
    pub fn with_ignore(mut self, patterns: Vec<String>) -> Self {
        self.ignore = patterns;
        self
    }
}
