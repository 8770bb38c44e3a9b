//! Bulk loading service
//!
//! Mirrors an external directory into a [`PathTree`] through the injected
//! [`DirectoryWalker`].

use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::PathTree;
use crate::infrastructure::traits::{DirectoryWalker, WalkOptions};
use crate::util::path::PathExt;

/// Outcome of a bulk load.
///
/// Unreadable sub-paths do not abort the load; they are collected in
/// `errors` as [`ApplicationError::IoPartialFailure`] values.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Nodes newly created in the tree
    pub inserted: usize,
    /// Entries yielded by the walker
    pub visited: usize,
    /// Non-fatal enumeration failures
    pub errors: Vec<ApplicationError>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} inserted, {} visited, {} errors",
            self.inserted,
            self.visited,
            self.errors.len()
        )
    }
}

/// Service for mirroring a directory into a tree.
pub struct LoadService {
    walker: Arc<dyn DirectoryWalker>,
    options: WalkOptions,
}

impl LoadService {
    /// Create a new load service with unrestricted walking.
    pub fn new(walker: Arc<dyn DirectoryWalker>) -> Self {
        Self::with_options(walker, WalkOptions::default())
    }

    pub fn with_options(walker: Arc<dyn DirectoryWalker>, options: WalkOptions) -> Self {
        Self { walker, options }
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    /// Mirror every descendant of `base` into `tree`.
    ///
    /// Missing intermediate nodes are created on demand, existing ones are
    /// reused, so enumeration order does not matter. Fails as a whole only if
    /// `base` is missing or not a directory.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn load(&self, tree: &mut PathTree, base: &Path) -> ApplicationResult<LoadReport> {
        if !self.walker.exists(base) {
            return Err(ApplicationError::BaseNotFound(base.to_path_buf()));
        }
        if !self.walker.is_dir(base) {
            return Err(ApplicationError::NotADirectory(base.to_path_buf()));
        }

        let mut report = LoadReport::default();
        for item in self.walker.walk(base, &self.options) {
            match item {
                Ok(entry) => {
                    report.visited += 1;
                    let Some(components) = entry.relative.to_components() else {
                        warn!("skipping non UTF-8 name: {}", entry.relative.display());
                        report.errors.push(ApplicationError::IoPartialFailure {
                            path: entry.relative,
                            source: io::Error::new(
                                io::ErrorKind::InvalidData,
                                "name is not valid UTF-8",
                            ),
                        });
                        continue;
                    };
                    report.inserted += tree.ensure_components(&components);
                }
                Err(failure) => {
                    warn!("skipping: {}", failure);
                    report.errors.push(failure.into());
                }
            }
        }

        debug!("load {}: {}", base.display(), report);
        Ok(report)
    }

    /// Build a fresh tree from `base`.
    pub fn load_new(&self, base: &Path) -> ApplicationResult<(PathTree, LoadReport)> {
        let mut tree = PathTree::new();
        let report = self.load(&mut tree, base)?;
        Ok((tree, report))
    }
}
