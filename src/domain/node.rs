//! Tree node with lexicographically ordered children.

use std::fmt;

use crate::domain::PathKind;

/// One path component of the mirrored hierarchy.
///
/// A node owns its children directly; dropping a node drops its whole subtree.
/// `children` is kept strictly increasing by `name` (byte-wise ordering), which
/// makes lookups a binary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Leaf nodes are files; the kind is never stored.
    pub fn is_file(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_dir(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn kind(&self) -> PathKind {
        if self.is_file() {
            PathKind::File
        } else {
            PathKind::Directory
        }
    }

    /// Binary search for the child called `name`, returning its position.
    pub fn search_child(&self, name: &str) -> Option<usize> {
        self.children
            .binary_search_by(|child| child.name.as_str().cmp(name))
            .ok()
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.search_child(name).map(|idx| &self.children[idx])
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.search_child(name)
            .map(move |idx| &mut self.children[idx])
    }

    /// Insert `node` at its lower-bound position by name.
    ///
    /// Performs no duplicate check: callers must have verified via
    /// [`Node::search_child`] that the name is absent.
    pub fn insert_child_sorted(&mut self, node: Node) -> usize {
        let idx = self
            .children
            .partition_point(|child| child.name.as_str() < node.name.as_str());
        self.children.insert(idx, node);
        idx
    }

    /// Detach the child at `idx`, handing back ownership of its subtree.
    pub fn remove_child(&mut self, idx: usize) -> Node {
        self.children.remove(idx)
    }

    /// Return the child called `name`, creating an empty one if missing.
    ///
    /// The flag reports whether a node was created.
    pub fn child_or_insert(&mut self, name: &str) -> (&mut Node, bool) {
        match self.search_child(name) {
            Some(idx) => (&mut self.children[idx], false),
            None => {
                let idx = self.insert_child_sorted(Node::new(name));
                (&mut self.children[idx], true)
            }
        }
    }

    /// Longest downward edge count from this node to a leaf.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes below this one (self excluded).
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// True if every sibling list in this subtree is strictly increasing.
    pub fn is_ordered(&self) -> bool {
        self.children.windows(2).all(|w| w[0].name < w[1].name)
            && self.children.iter().all(Node::is_ordered)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_file() {
            write!(f, "{} (file)", self.name)
        } else {
            write!(f, "{} (directory, {} children)", self.name, self.children.len())
        }
    }
}
