use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::vec;

use logging::{trace_entry, trace_walk};
use rustc_hash::FxHashSet;

use crate::entry::WalkEntry;
use crate::error::TraversalError;
use crate::outcome::WalkOutcome;
use crate::visit::{EntryKind, OpenedRoot, WalkConfig, classify, read_listing, report_soft_error};

/// Depth-first iterator over the regular files below a root.
///
/// Directories are entered as soon as they are met, before the next sibling,
/// and siblings come out in the order the filesystem listed them. Failures
/// below the root do not stop the iterator; they accumulate in
/// [`soft_errors`](Self::soft_errors).
pub struct Walker {
    config: WalkConfig,
    stack: Vec<DirectoryState>,
    visited: FxHashSet<PathBuf>,
    soft_errors: Vec<TraversalError>,
    cancelled: bool,
}

impl Walker {
    pub(crate) fn new(config: WalkConfig, root: OpenedRoot) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(root.canonical);

        let mut walker = Self {
            config,
            stack: Vec::new(),
            visited,
            soft_errors: Vec::new(),
            cancelled: false,
        };
        for error in root.listing.errors {
            walker.record(error);
        }
        walker.stack.push(DirectoryState::new(
            root.fs_path,
            PathBuf::new(),
            0,
            root.listing.names,
        ));
        walker
    }

    /// Returns the failures absorbed so far.
    #[must_use]
    pub fn soft_errors(&self) -> &[TraversalError] {
        &self.soft_errors
    }

    /// Reports whether the walker stopped because of cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Drains the iterator and returns everything it produced.
    #[must_use]
    pub fn run(mut self) -> WalkOutcome {
        let entries = self.by_ref().collect();
        WalkOutcome {
            entries,
            soft_errors: self.soft_errors,
            cancelled: self.cancelled,
        }
    }

    fn record(&mut self, error: TraversalError) {
        report_soft_error(&error);
        self.soft_errors.push(error);
    }

    fn enter_directory(&mut self, fs_path: PathBuf, relative_prefix: PathBuf, depth: usize) {
        let canonical = match fs::canonicalize(&fs_path) {
            Ok(canonical) => canonical,
            Err(error) => {
                self.record(TraversalError::canonicalize(fs_path, error));
                return;
            }
        };
        if !self.visited.insert(canonical) {
            trace_walk!(dir = %fs_path.display(), "skipping already visited directory");
            return;
        }

        match read_listing(&fs_path) {
            Ok(listing) => {
                for error in listing.errors {
                    self.record(error);
                }
                self.stack.push(DirectoryState::new(
                    fs_path,
                    relative_prefix,
                    depth,
                    listing.names,
                ));
            }
            Err(error) => self.record(error),
        }
    }
}

impl Iterator for Walker {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.config.cancel.is_cancelled() {
                if !self.cancelled {
                    trace_walk!(pending = self.stack.len(), "traversal cancelled");
                    self.cancelled = true;
                    self.stack.clear();
                }
                return None;
            }

            let (name, full_path, relative_path, depth) = {
                let state = self.stack.last_mut()?;
                match state.entries.next() {
                    Some(name) => {
                        let full_path = state.fs_path.join(&name);
                        let relative_path = state.relative_prefix.join(&name);
                        (name, full_path, relative_path, state.depth + 1)
                    }
                    None => {
                        self.stack.pop();
                        continue;
                    }
                }
            };

            if self.config.excludes(&name) {
                trace_entry!(path = %relative_path.display(), "excluded");
                continue;
            }

            match classify(&self.config, &full_path) {
                Ok(EntryKind::Directory) => self.enter_directory(full_path, relative_path, depth),
                Ok(EntryKind::File) => {
                    let path = self.config.display_path(&relative_path);
                    if self.config.includes(&path) {
                        trace_entry!(path = %path.display(), "emitting file");
                        return Some(WalkEntry {
                            path,
                            relative_path,
                            depth,
                        });
                    }
                    trace_entry!(path = %path.display(), "not included");
                }
                Ok(EntryKind::Other) => {
                    trace_entry!(path = %relative_path.display(), "skipping special entry");
                }
                Err(error) => self.record(error),
            }
        }
    }
}

impl std::fmt::Debug for Walker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walker")
            .field("root", &self.config.display_root)
            .field("pending_directories", &self.stack.len())
            .field("visited", &self.visited.len())
            .field("soft_errors", &self.soft_errors.len())
            .field("cancelled", &self.cancelled)
            .finish_non_exhaustive()
    }
}

struct DirectoryState {
    fs_path: PathBuf,
    relative_prefix: PathBuf,
    entries: vec::IntoIter<OsString>,
    depth: usize,
}

impl DirectoryState {
    fn new(fs_path: PathBuf, relative_prefix: PathBuf, depth: usize, names: Vec<OsString>) -> Self {
        Self {
            fs_path,
            relative_prefix,
            entries: names.into_iter(),
            depth,
        }
    }
}
