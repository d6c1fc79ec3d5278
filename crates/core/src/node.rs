//! Node model - the areas, projects, sections and tasks of the archive.

use std::cell::Cell;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use crate::stats::StatsRecord;

/// The kind of a node in the archive hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A folder-level grouping of sub-areas and projects
    Area,
    /// A unit of work holding sections and tasks
    Project,
    /// A named, nestable grouping inside a project
    Section,
    /// A leaf unit of work with status flags
    Task,
    /// A task-shaped reference to another project by name
    Link,
    /// Anything the archive tags with an unrecognised or missing type
    #[default]
    #[serde(other)]
    Unknown,
}

impl NodeKind {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Area => "area",
            NodeKind::Project => "project",
            NodeKind::Section => "section",
            NodeKind::Task => "task",
            NodeKind::Link => "link",
            NodeKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project flags as stored in the archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFlags {
    /// Tags such as `#active` or `#sprint`
    #[serde(default)]
    pub tag: Vec<String>,
}

/// A node of the archive tree.
///
/// Every kind shares one shape; collections that are meaningless for a kind
/// simply stay empty. The stats cache is never serialized and is only written
/// by the aggregator (see [`Node::stats`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Node kind
    #[serde(rename = "type", default)]
    pub kind: NodeKind,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Marks the top-level area of a walk
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub root: bool,

    /// Section nesting depth, starting at 1 below the project
    #[serde(default, skip_serializing_if = "is_zero")]
    pub level: u32,

    /// Task is done
    #[serde(default, deserialize_with = "lenient_flag")]
    pub done: bool,

    /// Task failed
    #[serde(default, deserialize_with = "lenient_flag")]
    pub failed: bool,

    /// Task waits on something external
    #[serde(default, deserialize_with = "lenient_flag")]
    pub waiting: bool,

    /// Task blocks other work
    #[serde(default, deserialize_with = "lenient_flag")]
    pub blocking: bool,

    /// Target project name of a link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Project flags
    #[serde(default)]
    pub flags: ProjectFlags,

    /// Directory an area was loaded from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// File a project was loaded from
    #[serde(rename = "jsonFile", default, skip_serializing_if = "Option::is_none")]
    pub json_file: Option<PathBuf>,

    /// Tasks (and sub-tasks of a task)
    #[serde(default)]
    pub tasks: Vec<Node>,

    /// Sections
    #[serde(default)]
    pub sections: Vec<Node>,

    /// Projects of an area
    #[serde(default)]
    pub projects: Vec<Node>,

    /// Sub-areas of an area
    #[serde(default)]
    pub areas: Vec<Node>,

    #[serde(skip)]
    pub(crate) stats: Cell<Option<StatsRecord>>,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

/// Only a literal JSON `true` sets a flag.
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(matches!(value, serde_json::Value::Bool(true)))
}

impl Node {
    /// Create an empty node of the given kind.
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    /// Create an area.
    pub fn area(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Area, name)
    }

    /// Create the root area of an archive.
    pub fn root_area(name: impl Into<String>) -> Self {
        Self {
            root: true,
            ..Self::area(name)
        }
    }

    /// Create a project.
    pub fn project(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Project, name)
    }

    /// Create a section at the given level.
    pub fn section(name: impl Into<String>, level: u32) -> Self {
        Self {
            level,
            ..Self::new(NodeKind::Section, name)
        }
    }

    /// Create an open task.
    pub fn task(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Task, name)
    }

    /// Create a link to the project called `target`.
    pub fn link(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            project: Some(target.clone()),
            ..Self::new(NodeKind::Link, target)
        }
    }

    /// Append a task.
    pub fn with_task(mut self, task: Node) -> Self {
        self.tasks.push(task);
        self
    }

    /// Append a section.
    pub fn with_section(mut self, section: Node) -> Self {
        self.sections.push(section);
        self
    }

    /// Append a project.
    pub fn with_project(mut self, project: Node) -> Self {
        self.projects.push(project);
        self
    }

    /// Append a sub-area.
    pub fn with_area(mut self, area: Node) -> Self {
        self.areas.push(area);
        self
    }

    /// Add a project tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.flags.tag.push(tag.into());
        self
    }

    /// Mark as done.
    pub fn done(mut self) -> Self {
        self.done = true;
        self
    }

    /// Mark as failed.
    pub fn failed(mut self) -> Self {
        self.failed = true;
        self
    }

    /// Mark as waiting.
    pub fn waiting(mut self) -> Self {
        self.waiting = true;
        self
    }

    /// Mark as blocking.
    pub fn blocking(mut self) -> Self {
        self.blocking = true;
        self
    }

    /// Whether the project carries `tag`.
    pub fn is_tagged(&self, tag: &str) -> bool {
        self.flags.tag.iter().any(|t| t == tag)
    }

    /// Child collections in traversal order: tasks, sections, projects, areas.
    pub fn children(&self) -> [&[Node]; 4] {
        [
            self.tasks.as_slice(),
            self.sections.as_slice(),
            self.projects.as_slice(),
            self.areas.as_slice(),
        ]
    }
}
