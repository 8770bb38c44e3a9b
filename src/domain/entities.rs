//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a relative path against the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Absent,
    File,
    Directory,
}

impl PathKind {
    pub fn exists(self) -> bool {
        self != PathKind::Absent
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PathKind::Absent => "absent",
            PathKind::File => "file",
            PathKind::Directory => "directory",
        };
        f.write_str(s)
    }
}

/// Aggregate figures over every non-root node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// All nodes except the root
    pub node_count: usize,
    /// Leaf nodes
    pub file_count: usize,
    /// Nodes with at least one child
    pub directory_count: usize,
    /// Longest root-to-leaf edge count
    pub height: usize,
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes: {}, files: {}, directories: {}, height: {}",
            self.node_count, self.file_count, self.directory_count, self.height
        )
    }
}

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
///
/// Uses shellexpand crate for robust expansion.
/// Falls back to the input unchanged if expansion fails.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
