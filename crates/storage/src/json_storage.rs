//! JSON archive walker.
//!
//! The archive is a directory tree: every directory is an area (named by its
//! `.info.json`), every other `*.json` file is a project.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use regex::Regex;
use serde::Deserialize;
use tokio::fs;
use tracing::{debug, warn};
use zettel_core::{Node, NodeKind};

use super::{ArchiveSource, Result, StorageError};

/// Name of the per-directory area descriptor.
pub const INFO_FILE: &str = ".info.json";

/// Paths skipped by default.
pub const DEFAULT_IGNORE: &[&str] = &["gitignore", r"/\.git(/|$)"];

#[derive(Debug, Deserialize)]
struct AreaInfo {
    name: Option<String>,
}

type BoxedNode<'a> = Pin<Box<dyn Future<Output = Result<Node>> + Send + 'a>>;

/// File-based JSON archive.
pub struct JsonArchive {
    root: PathBuf,
    ignore: Vec<Regex>,
}

impl JsonArchive {
    /// Open an archive rooted at `root` with the default ignore rules.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ignore: DEFAULT_IGNORE
                .iter()
                .filter_map(|p| Regex::new(p).ok())
                .collect(),
        }
    }

    /// Replace the ignore rules.
    pub fn with_ignore<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignore = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, regex::Error>>()?;
        Ok(self)
    }

    /// Archive root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ignore rules see the path below the root, with a leading `/`.
    fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let text = format!("/{}", relative.to_string_lossy());
        self.ignore.iter().any(|re| re.is_match(&text))
    }

    /// Area name from `.info.json`, falling back to the directory name.
    async fn area_name(&self, dir: &Path) -> String {
        let fallback = || {
            dir.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| dir.to_string_lossy().into_owned())
        };

        let info_path = dir.join(INFO_FILE);
        match read_json::<AreaInfo>(&info_path).await {
            Ok(Some(AreaInfo { name: Some(name) })) => name,
            Ok(_) => {
                warn!("No area name in {}, using directory name", info_path.display());
                fallback()
            }
            Err(e) => {
                warn!("Unreadable {}: {}", info_path.display(), e);
                fallback()
            }
        }
    }

    fn load_area(&self, dir: PathBuf, root: bool) -> BoxedNode<'_> {
        Box::pin(async move {
            let mut area = Node::area(self.area_name(&dir).await);
            area.root = root;
            debug!("Walking area {} ({})", area.name, dir.display());

            let mut entries = Vec::new();
            let mut rd = fs::read_dir(&dir).await?;
            while let Some(entry) = rd.next_entry().await? {
                let is_dir = entry.file_type().await?.is_dir();
                entries.push((entry.path(), is_dir));
            }
            entries.sort();

            for (path, is_dir) in entries {
                if self.is_ignored(&path) {
                    debug!("Skipping {}", path.display());
                    continue;
                }

                if is_dir {
                    area.areas.push(self.load_area(path, false).await?);
                } else if is_project_file(&path) {
                    area.projects.push(self.load_project(&path).await?);
                }
            }

            area.path = Some(dir);
            Ok(area)
        })
    }
}

fn is_project_file(path: &Path) -> bool {
    let is_json = path.extension().and_then(|s| s.to_str()) == Some("json");
    let is_info = path
        .file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.ends_with(INFO_FILE));
    is_json && !is_info
}

#[async_trait::async_trait]
impl ArchiveSource for JsonArchive {
    async fn load_project(&self, path: &Path) -> Result<Node> {
        let mut project: Node = read_json(path)
            .await?
            .ok_or_else(|| StorageError::NotFound(path.display().to_string()))?;

        if project.kind == NodeKind::Unknown {
            debug!("Treating untyped {} as a project", path.display());
            project.kind = NodeKind::Project;
        }
        project.json_file = Some(path.to_path_buf());
        Ok(project)
    }

    async fn load_area_tree(&self) -> Result<Node> {
        let meta = fs::metadata(&self.root).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(self.root.display().to_string())
            } else {
                e.into()
            }
        })?;
        if !meta.is_dir() {
            return Err(StorageError::Other(format!(
                "archive root is not a directory: {}",
                self.root.display()
            )));
        }

        self.load_area(self.root.clone(), true).await
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json).map_err(|source| StorageError::Json {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.unwrap();
        }
        fs::write(path, contents).await.unwrap();
    }

    async fn sample_archive() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        write(&root.join(INFO_FILE), r#"{ "name": "Projects" }"#).await;
        write(
            &root.join("taxes.json"),
            r#"{ "name": "Taxes", "type": "project", "tasks": [ { "name": "file", "type": "task", "done": true } ] }"#,
        )
        .await;
        write(&root.join("work").join(INFO_FILE), r#"{ "name": "Work" }"#).await;
        write(
            &root.join("work").join("payroll.json"),
            r#"{ "name": "Payroll", "tasks": [ { "name": "run", "type": "task" } ] }"#,
        )
        .await;
        write(&root.join("home").join("garden.json"), r#"{ "name": "Garden", "type": "project" }"#).await;
        write(&root.join(".gitignore"), "*.swp").await;
        write(&root.join(".git").join("config.json"), "{}").await;
        write(&root.join("notes.txt"), "not json").await;

        dir
    }

    #[tokio::test]
    async fn test_load_area_tree() {
        let dir = sample_archive().await;
        let archive = JsonArchive::new(dir.path());
        let tree = archive.load_area_tree().await.unwrap();

        assert!(tree.root);
        assert_eq!(tree.name, "Projects");
        assert_eq!(tree.path.as_deref(), Some(dir.path()));

        // Sorted: home before work.
        let areas: Vec<&str> = tree.areas.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(areas, vec!["home", "Work"]);
        assert!(!tree.areas[0].root);

        assert_eq!(tree.projects.len(), 1);
        assert_eq!(tree.projects[0].name, "Taxes");
        assert_eq!(tree.projects[0].json_file.as_deref(), Some(dir.path().join("taxes.json").as_path()));

        let payroll = &tree.areas[1].projects[0];
        assert_eq!(payroll.kind, NodeKind::Project);

        let stats = tree.stats();
        assert_eq!(stats.projects, 3);
        assert_eq!(stats.areas, 2);
        assert_eq!(stats.tasks, 2);
        assert_eq!(stats.done, 1);
    }

    #[tokio::test]
    async fn test_custom_ignore() {
        let dir = sample_archive().await;
        let archive = JsonArchive::new(dir.path())
            .with_ignore(["gitignore", r"/\.git(/|$)", "/home$"])
            .unwrap();
        let tree = archive.load_area_tree().await.unwrap();
        assert_eq!(tree.areas.len(), 1);
        assert_eq!(tree.areas[0].name, "Work");
    }

    #[tokio::test]
    async fn test_ignore_rules_skip_root_path() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("gitignore-demo");
        write(&root.join("a.json"), r#"{ "name": "A", "type": "project" }"#).await;
        fs::create_dir_all(root.join("work")).await.unwrap();

        let tree = JsonArchive::new(&root).load_area_tree().await.unwrap();
        assert_eq!(tree.projects.len(), 1);
        assert_eq!(tree.areas.len(), 1);

        // A user rule matching only the root's own name skips nothing.
        let tree = JsonArchive::new(&root)
            .with_ignore(["demo"])
            .unwrap()
            .load_area_tree()
            .await
            .unwrap();
        let stats = tree.stats();
        assert_eq!(stats.projects, 1);
        assert_eq!(stats.areas, 1);
    }

    #[test]
    fn test_ignore_rules_anchor_below_root() {
        let archive = JsonArchive::new("/srv/.git/archive");
        assert!(!archive.is_ignored(Path::new("/srv/.git/archive/work")));
        assert!(archive.is_ignored(Path::new("/srv/.git/archive/.git")));
        assert!(archive.is_ignored(Path::new("/srv/.git/archive/.git/config.json")));
        assert!(archive.is_ignored(Path::new("/srv/.git/archive/.gitignore")));
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let result = JsonArchive::new("/tmp").with_ignore(["("]);
        assert!(matches!(result, Err(StorageError::Pattern(_))));
    }

    #[tokio::test]
    async fn test_load_project_errors() {
        let dir = tempfile::tempdir().unwrap();
        let archive = JsonArchive::new(dir.path());

        let missing = archive.load_project(&dir.path().join("nope.json")).await;
        assert!(matches!(missing, Err(StorageError::NotFound(_))));

        let broken = dir.path().join("broken.json");
        write(&broken, "{ not json").await;
        let result = archive.load_project(&broken).await;
        assert!(matches!(result, Err(StorageError::Json { .. })));
    }

    #[tokio::test]
    async fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let archive = JsonArchive::new(dir.path().join("absent"));
        assert!(matches!(archive.load_area_tree().await, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_is_project_file() {
        assert!(is_project_file(Path::new("/a/b.json")));
        assert!(!is_project_file(Path::new("/a/.info.json")));
        assert!(!is_project_file(Path::new("/a/b.txt")));
    }
}
