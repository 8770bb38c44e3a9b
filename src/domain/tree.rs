//! Ordered k-ary tree mirroring a directory hierarchy.
//!
//! Every operation takes a `/`-delimited relative path, splits it into
//! components and walks from the root one binary search per level.

use termtree::Tree;
use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::Node;
use crate::domain::path::{split_components, split_parent};
use crate::domain::{PathKind, TreeStats};

/// Name of the implicit root node. The root is never addressed by a path.
pub const ROOT_NAME: &str = "root";

/// In-memory mirror of a directory hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTree {
    root: Node,
}

impl Default for PathTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PathTree {
    pub fn new() -> Self {
        Self {
            root: Node::new(ROOT_NAME),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    fn resolve(&self, components: &[&str]) -> Option<&Node> {
        let mut current = &self.root;
        for name in components {
            current = current.child(name)?;
        }
        Some(current)
    }

    fn resolve_mut(&mut self, components: &[&str]) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for name in components {
            current = current.child_mut(name)?;
        }
        Some(current)
    }

    /// Classify `path` as absent, file or directory.
    ///
    /// A path without components (`""`, `"/"`) resolves to the root and is
    /// always reported as a directory, even for an empty tree.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, path: &str) -> PathKind {
        let components = split_components(path);
        if components.is_empty() {
            return PathKind::Directory;
        }
        self.resolve(&components)
            .map(Node::kind)
            .unwrap_or(PathKind::Absent)
    }

    /// Resolve `path` to its node. The root is never returned.
    pub fn get(&self, path: &str) -> Option<&Node> {
        let components = split_components(path);
        if components.is_empty() {
            return None;
        }
        self.resolve(&components)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Insert a new leaf at `path`.
    ///
    /// Every component but the last must already exist. The `is_dir` hint is
    /// recorded in the log only: a node becomes a directory once something
    /// is inserted beneath it.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, path: &str, is_dir: bool) -> DomainResult<()> {
        let (parents, name) =
            split_parent(path).ok_or_else(|| DomainError::InvalidPath(path.to_string()))?;

        let parent = self
            .resolve_mut(&parents)
            .ok_or_else(|| DomainError::ParentNotFound(path.to_string()))?;

        if parent.search_child(name).is_some() {
            return Err(DomainError::AlreadyExists(path.to_string()));
        }

        let idx = parent.insert_child_sorted(Node::new(name));
        debug!("inserted {} at position {} (dir hint: {})", path, idx, is_dir);
        Ok(())
    }

    /// Remove the node at `path` together with its subtree.
    ///
    /// The detached subtree is returned; dropping it releases every descendant.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, path: &str) -> DomainResult<Node> {
        let (parents, name) =
            split_parent(path).ok_or_else(|| DomainError::InvalidPath(path.to_string()))?;

        let parent = self
            .resolve_mut(&parents)
            .ok_or_else(|| DomainError::NotFound(path.to_string()))?;

        let idx = parent
            .search_child(name)
            .ok_or_else(|| DomainError::NotFound(path.to_string()))?;

        let removed = parent.remove_child(idx);
        debug!(
            "deleted {} ({} descendants)",
            path,
            removed.descendant_count()
        );
        Ok(removed)
    }

    /// Walk `path`, creating every missing component on the way.
    ///
    /// Existing components are reused, so this never fails on collisions.
    /// Returns the number of nodes created.
    pub fn ensure_path(&mut self, path: &str) -> DomainResult<usize> {
        let components = split_components(path);
        if components.is_empty() {
            return Err(DomainError::InvalidPath(path.to_string()));
        }
        Ok(self.ensure_components(&components))
    }

    /// Component-wise variant of [`PathTree::ensure_path`].
    pub fn ensure_components<S: AsRef<str>>(&mut self, components: &[S]) -> usize {
        let mut created = 0;
        let mut current = &mut self.root;
        for name in components {
            let name = name.as_ref();
            if name.is_empty() {
                continue;
            }
            let (child, is_new) = current.child_or_insert(name);
            if is_new {
                trace!("created component {}", name);
                created += 1;
            }
            current = child;
        }
        created
    }

    /// Lazy pre-order traversal yielding `(path, node)` for every non-root node.
    pub fn iter(&self) -> PathIter<'_> {
        PathIter::new(&self.root)
    }

    /// Every non-root path, parent before children, siblings in sorted order.
    pub fn all_paths(&self) -> Vec<String> {
        self.iter().map(|(path, _)| path).collect()
    }

    pub fn all_directories(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.is_dir())
            .map(|(path, _)| path)
            .collect()
    }

    pub fn all_files(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.is_file())
            .map(|(path, _)| path)
            .collect()
    }

    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn node_count(&self) -> usize {
        self.all_paths().len()
    }

    /// Files counted by classifying every enumerated path.
    pub fn file_count(&self) -> usize {
        self.all_paths()
            .iter()
            .filter(|path| self.find(path) == PathKind::File)
            .count()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn stats(&self) -> TreeStats {
        let node_count = self.node_count();
        let file_count = self.file_count();
        TreeStats {
            node_count,
            file_count,
            directory_count: node_count - file_count,
            height: self.height(),
        }
    }

    pub fn len(&self) -> usize {
        self.root.descendant_count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_file()
    }

    /// Render the structure down to `max_depth` levels below the root.
    pub fn to_display_tree(&self, max_depth: usize) -> Tree<String> {
        fn build(node: &Node, level: usize, max_depth: usize) -> Tree<String> {
            let mut tree = Tree::new(node.to_string());
            if level < max_depth {
                for child in node.children() {
                    tree.push(build(child, level + 1, max_depth));
                }
            }
            tree
        }

        build(&self.root, 0, max_depth)
    }
}

/// Pre-order iterator over `(path, node)` pairs.
pub struct PathIter<'a> {
    stack: Vec<(String, &'a Node)>,
}

impl<'a> PathIter<'a> {
    fn new(root: &'a Node) -> Self {
        let stack = root
            .children()
            .iter()
            .rev()
            .map(|child| (child.name().to_string(), child))
            .collect();
        Self { stack }
    }
}

impl<'a> Iterator for PathIter<'a> {
    type Item = (String, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children().iter().rev() {
            self.stack
                .push((format!("{}/{}", path, child.name()), child));
        }
        Some((path, node))
    }
}
