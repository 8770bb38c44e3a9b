//! In-memory mirror of a directory hierarchy as an ordered k-ary tree.
//!
//! Siblings are kept sorted by name so every path component resolves with a
//! binary search. Paths are `/`-delimited and relative to an implicit root.
//!
//! ```
//! use pathtree::{PathKind, PathTree};
//!
//! let mut tree = PathTree::new();
//! tree.insert("dir1", true).unwrap();
//! tree.insert("dir1/file1.txt", false).unwrap();
//! assert_eq!(tree.find("dir1"), PathKind::Directory);
//! assert_eq!(tree.find("dir1/file1.txt"), PathKind::File);
//! assert_eq!(tree.find("dir3"), PathKind::Absent);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::services::{LoadReport, LoadService};
pub use domain::{DomainError, DomainResult, Node, PathKind, PathTree, TreeStats};
