//! Tree traversal.
//!
//! A single pre-order walk drives every report: the node itself is checked
//! first, then its tasks, sections, projects and areas, each in stored order.

use crate::node::{Node, NodeKind};

/// A typed field-equality predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// `name` equals
    Name(String),
    /// `level` equals
    Level(u32),
    /// `root` equals
    Root(bool),
    /// `done` equals
    Done(bool),
    /// `failed` equals
    Failed(bool),
    /// `waiting` equals
    Waiting(bool),
    /// `blocking` equals
    Blocking(bool),
}

impl Attribute {
    /// Check the attribute against a node.
    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Attribute::Name(name) => node.name == *name,
            Attribute::Level(level) => node.level == *level,
            Attribute::Root(root) => node.root == *root,
            Attribute::Done(done) => node.done == *done,
            Attribute::Failed(failed) => node.failed == *failed,
            Attribute::Waiting(waiting) => node.waiting == *waiting,
            Attribute::Blocking(blocking) => node.blocking == *blocking,
        }
    }
}

/// Selects which nodes a traversal reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criteria {
    /// Nodes of a kind
    Kind(NodeKind),
    /// Nodes whose attribute matches
    Attribute(Attribute),
    /// Nodes of a kind whose attribute matches
    Both(NodeKind, Attribute),
}

impl Criteria {
    /// Match nodes of `kind`.
    pub fn kind(kind: NodeKind) -> Self {
        Criteria::Kind(kind)
    }

    /// Match nodes by attribute.
    pub fn attribute(attribute: Attribute) -> Self {
        Criteria::Attribute(attribute)
    }

    /// Narrow to nodes that also match `attribute`.
    pub fn with_attribute(self, attribute: Attribute) -> Self {
        match self {
            Criteria::Kind(kind) | Criteria::Both(kind, _) => Criteria::Both(kind, attribute),
            Criteria::Attribute(_) => Criteria::Attribute(attribute),
        }
    }

    /// Check a single node.
    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Criteria::Kind(kind) => node.kind == *kind,
            Criteria::Attribute(attribute) => attribute.matches(node),
            Criteria::Both(kind, attribute) => node.kind == *kind && attribute.matches(node),
        }
    }
}

impl From<NodeKind> for Criteria {
    fn from(kind: NodeKind) -> Self {
        Criteria::Kind(kind)
    }
}

/// Visit every node under (and including) `node` that matches `criteria`.
pub fn traverse<'a, F>(criteria: &Criteria, node: &'a Node, visit: &mut F)
where
    F: FnMut(&'a Node),
{
    if criteria.matches(node) {
        visit(node);
    }

    for collection in node.children() {
        for child in collection {
            traverse(criteria, child, visit);
        }
    }
}

/// Matching nodes in visit order.
pub fn collect<'a>(criteria: &Criteria, node: &'a Node) -> Vec<&'a Node> {
    let mut found = Vec::new();
    traverse(criteria, node, &mut |n| found.push(n));
    found
}

/// Number of matching nodes.
pub fn count(criteria: &Criteria, node: &Node) -> usize {
    let mut n = 0;
    traverse(criteria, node, &mut |_| n += 1);
    n
}

/// An owned hierarchy with its root.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    root: Node,
}

impl Tree {
    /// Wrap a root node.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Traverse from the root.
    pub fn traverse<'a, F>(&'a self, criteria: &Criteria, visit: &mut F)
    where
        F: FnMut(&'a Node),
    {
        traverse(criteria, &self.root, visit);
    }

    /// First node in traversal order matching `criteria`.
    pub fn find(&self, criteria: &Criteria) -> Option<&Node> {
        let mut first = None;
        self.traverse(criteria, &mut |n| {
            if first.is_none() {
                first = Some(n);
            }
        });
        first
    }

    /// Give the root back.
    pub fn into_root(self) -> Node {
        self.root
    }
}

impl From<Node> for Tree {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}
