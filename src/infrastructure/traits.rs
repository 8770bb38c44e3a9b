//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::trace;
use walkdir::WalkDir;

use crate::util::path::PathExt;

/// Kind of an enumerated filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, devices: mirrored as plain leaves
    Other,
}

/// One descendant of the walked base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Path relative to the walk base
    pub relative: PathBuf,
    pub kind: EntryKind,
}

/// A sub-path that could not be enumerated.
#[derive(Error, Debug)]
#[error("cannot read {}: {source}", path.display())]
pub struct WalkFailure {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Options applied while enumerating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Maximum depth below the base (None = unlimited)
    pub max_depth: Option<usize>,
    /// Skip entries whose name starts with `.`, pruning their subtrees
    pub skip_hidden: bool,
}

/// Directory enumeration abstraction used by bulk loading.
///
/// Yields every descendant of `base` (the base itself excluded). Per-entry
/// access failures are yielded as `Err` items, never swallowed.
pub trait DirectoryWalker: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Enumerate all descendants of `base`.
    fn walk<'a>(
        &'a self,
        base: &Path,
        options: &WalkOptions,
    ) -> Box<dyn Iterator<Item = Result<WalkEntry, WalkFailure>> + 'a>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real directory walker backed by `walkdir`. Symlinks are not followed.
#[derive(Debug, Default)]
pub struct WalkDirWalker;

impl DirectoryWalker for WalkDirWalker {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk<'a>(
        &'a self,
        base: &Path,
        options: &WalkOptions,
    ) -> Box<dyn Iterator<Item = Result<WalkEntry, WalkFailure>> + 'a> {
        let base = base.to_path_buf();
        let skip_hidden = options.skip_hidden;

        let mut walker = WalkDir::new(&base).min_depth(1).follow_links(false);
        if let Some(depth) = options.max_depth {
            walker = walker.max_depth(depth);
        }

        let iter = walker
            .into_iter()
            // depth 0 is the base itself, which may well be "."
            .filter_entry(move |e| !(skip_hidden && e.depth() > 0 && e.path().is_hidden()))
            .map(move |res| to_walk_item(res, &base));

        Box::new(iter)
    }
}

fn to_walk_item(
    res: walkdir::Result<walkdir::DirEntry>,
    base: &Path,
) -> Result<WalkEntry, WalkFailure> {
    match res {
        Ok(entry) => {
            let relative = entry
                .path()
                .strip_prefix(base)
                .map_err(|e| WalkFailure {
                    path: entry.path().to_path_buf(),
                    source: io::Error::new(io::ErrorKind::InvalidInput, e.to_string()),
                })?
                .to_path_buf();

            // tree nodes are named by strings; a lossy name could collide with a sibling
            if relative.to_str().is_none() {
                return Err(WalkFailure {
                    path: entry.path().to_path_buf(),
                    source: io::Error::new(
                        io::ErrorKind::InvalidData,
                        "name is not valid UTF-8",
                    ),
                });
            }

            let file_type = entry.file_type();
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            trace!("walk: {} ({:?})", relative.display(), kind);
            Ok(WalkEntry { relative, kind })
        }
        Err(err) => {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| base.to_path_buf());
            let message = err.to_string();
            let source = err
                .into_io_error()
                .unwrap_or_else(|| io::Error::other(message));
            Err(WalkFailure { path, source })
        }
    }
}
