//! Statistics aggregation over the archive tree.
//!
//! Projects are the unit of truth: their numbers come from counting raw
//! sections and tasks. Areas never look at tasks directly, they add up the
//! records of the projects below them.

use std::ops::{Add, AddAssign};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::node::{Node, NodeKind};
use crate::tree::{traverse, Criteria};

/// Aggregate counters for a subtree.
///
/// `areas` and `projects` are only filled in at area scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StatsRecord {
    /// Non-root areas
    pub areas: usize,
    /// Projects
    pub projects: usize,
    /// Tasks
    pub tasks: usize,
    /// Tasks flagged done
    pub done: usize,
    /// Tasks flagged failed
    pub failed: usize,
    /// Tasks flagged waiting
    pub waiting: usize,
    /// Tasks flagged blocking
    pub blocking: usize,
    /// Sections
    pub sections: usize,
}

impl StatsRecord {
    /// Tasks neither done nor failed.
    ///
    /// Signed: a task flagged both done and failed is subtracted twice.
    pub fn remaining(&self) -> i64 {
        self.tasks as i64 - self.done as i64 - self.failed as i64
    }

    /// Whether the record holds no tasks at all.
    pub fn is_empty(&self) -> bool {
        self.tasks == 0
    }

    /// One-line bold summary for project zettels.
    pub fn summary(&self) -> String {
        format!(
            "**Sections:** {}, **Tasks:** {}, **Done:** {}, **Failed:** {}, **Waiting:** {}, **Blocking:** {}, **Remaining:** {}",
            self.sections,
            self.tasks,
            self.done,
            self.failed,
            self.waiting,
            self.blocking,
            self.remaining(),
        )
    }

    fn count_task(&mut self, task: &Node) {
        self.tasks += 1;
        self.done += usize::from(task.done);
        self.failed += usize::from(task.failed);
        self.waiting += usize::from(task.waiting);
        self.blocking += usize::from(task.blocking);
    }
}

impl AddAssign for StatsRecord {
    fn add_assign(&mut self, other: Self) {
        self.areas += other.areas;
        self.projects += other.projects;
        self.tasks += other.tasks;
        self.done += other.done;
        self.failed += other.failed;
        self.waiting += other.waiting;
        self.blocking += other.blocking;
        self.sections += other.sections;
    }
}

impl Add for StatsRecord {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl std::iter::Sum for StatsRecord {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl Serialize for StatsRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("StatsRecord", 9)?;
        s.serialize_field("areas", &self.areas)?;
        s.serialize_field("projects", &self.projects)?;
        s.serialize_field("tasks", &self.tasks)?;
        s.serialize_field("remaining", &self.remaining())?;
        s.serialize_field("done", &self.done)?;
        s.serialize_field("failed", &self.failed)?;
        s.serialize_field("waiting", &self.waiting)?;
        s.serialize_field("blocking", &self.blocking)?;
        s.serialize_field("sections", &self.sections)?;
        s.end()
    }
}

/// Count sections and tasks under (and including) `node`.
///
/// Works for any subtree root: a project, a section, or a task with sub-tasks.
pub fn project_stats(node: &Node) -> StatsRecord {
    let mut stats = StatsRecord::default();

    traverse(&Criteria::kind(NodeKind::Section), node, &mut |_| stats.sections += 1);
    traverse(&Criteria::kind(NodeKind::Task), node, &mut |task| stats.count_task(task));

    stats
}

/// Sum the project records under an area.
///
/// Each project's own (memoized) record is used. Child areas get their
/// caches refreshed along the way.
pub fn area_stats(node: &Node) -> StatsRecord {
    let mut stats = StatsRecord::default();

    traverse(&Criteria::kind(NodeKind::Area), node, &mut |area| {
        if !area.root {
            stats.areas += 1;
        }
    });

    traverse(&Criteria::kind(NodeKind::Project), node, &mut |project| {
        stats.projects += 1;
        let own = project.stats();
        stats.tasks += own.tasks;
        stats.done += own.done;
        stats.failed += own.failed;
        stats.waiting += own.waiting;
        stats.blocking += own.blocking;
        stats.sections += own.sections;
    });

    for child in &node.areas {
        child.recompute_stats();
    }

    stats
}

/// Stats for `node`, computed once and cached on the node.
pub fn compute_stats(node: &Node) -> StatsRecord {
    node.stats()
}

impl Node {
    /// Memoized statistics for this subtree.
    ///
    /// The first call computes and caches; later calls return the cached
    /// record even if the subtree changed in between.
    pub fn stats(&self) -> StatsRecord {
        match self.stats.get() {
            Some(stats) => stats,
            None => self.recompute_stats(),
        }
    }

    /// Recompute statistics and overwrite the cache.
    pub fn recompute_stats(&self) -> StatsRecord {
        let stats = match self.kind {
            NodeKind::Area => area_stats(self),
            _ => project_stats(self),
        };
        self.stats.set(Some(stats));
        stats
    }

    /// The cached record, if any.
    pub fn cached_stats(&self) -> Option<StatsRecord> {
        self.stats.get()
    }

    /// Drop the cached record.
    pub fn clear_stats(&self) {
        self.stats.set(None);
    }

    /// Drop the cached records of this node and everything below it.
    pub fn clear_subtree_stats(&self) {
        self.clear_stats();
        for collection in self.children() {
            for child in collection {
                child.clear_subtree_stats();
            }
        }
    }
}
