//! Rayon-backed traversal producing the same pre-order as [`crate::Walker`].
//!
//! Each directory's entries are processed as one parallel batch. Results are
//! collected positionally and concatenated, so the merged output keeps the
//! raw enumeration order of every directory. When two paths alias the same
//! directory, whichever task claims it first in the shared visited set is the
//! one that lists it.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use dashmap::DashSet;
use logging::{trace_entry, trace_walk};
use rayon::prelude::*;

use crate::entry::WalkEntry;
use crate::error::TraversalError;
use crate::outcome::WalkOutcome;
use crate::visit::{EntryKind, OpenedRoot, WalkConfig, classify, read_listing, report_soft_error};

#[derive(Default)]
struct Fragment {
    entries: Vec<WalkEntry>,
    soft_errors: Vec<TraversalError>,
}

impl Fragment {
    fn error(error: TraversalError) -> Self {
        report_soft_error(&error);
        Self {
            entries: Vec::new(),
            soft_errors: vec![error],
        }
    }

    fn append(&mut self, mut other: Self) {
        self.entries.append(&mut other.entries);
        self.soft_errors.append(&mut other.soft_errors);
    }
}

pub(crate) fn walk(config: &WalkConfig, root: OpenedRoot) -> WalkOutcome {
    let visited = DashSet::new();
    visited.insert(root.canonical);

    let mut fragment = Fragment::default();
    for error in root.listing.errors {
        fragment.append(Fragment::error(error));
    }
    fragment.append(walk_directory(
        config,
        &visited,
        &root.fs_path,
        Path::new(""),
        0,
        root.listing.names,
    ));

    let cancelled = config.cancel.is_cancelled();
    if cancelled {
        trace_walk!(emitted = fragment.entries.len(), "parallel traversal cancelled");
    }
    WalkOutcome {
        entries: fragment.entries,
        soft_errors: fragment.soft_errors,
        cancelled,
    }
}

fn walk_directory(
    config: &WalkConfig,
    visited: &DashSet<PathBuf>,
    fs_path: &Path,
    relative_prefix: &Path,
    depth: usize,
    names: Vec<OsString>,
) -> Fragment {
    names
        .into_par_iter()
        .map(|name| {
            if config.cancel.is_cancelled() || config.excludes(&name) {
                return Fragment::default();
            }
            let full_path = fs_path.join(&name);
            let relative_path = relative_prefix.join(&name);
            visit_entry(config, visited, full_path, relative_path, depth + 1)
        })
        .collect::<Vec<_>>()
        .into_iter()
        .fold(Fragment::default(), |mut merged, fragment| {
            merged.append(fragment);
            merged
        })
}

fn visit_entry(
    config: &WalkConfig,
    visited: &DashSet<PathBuf>,
    full_path: PathBuf,
    relative_path: PathBuf,
    depth: usize,
) -> Fragment {
    match classify(config, &full_path) {
        Ok(EntryKind::Directory) => {
            let canonical = match fs::canonicalize(&full_path) {
                Ok(canonical) => canonical,
                Err(error) => return Fragment::error(TraversalError::canonicalize(full_path, error)),
            };
            if !visited.insert(canonical) {
                trace_walk!(dir = %full_path.display(), "skipping already visited directory");
                return Fragment::default();
            }
            match read_listing(&full_path) {
                Ok(listing) => {
                    let mut fragment = Fragment::default();
                    for error in listing.errors {
                        fragment.append(Fragment::error(error));
                    }
                    fragment.append(walk_directory(
                        config,
                        visited,
                        &full_path,
                        &relative_path,
                        depth,
                        listing.names,
                    ));
                    fragment
                }
                Err(error) => Fragment::error(error),
            }
        }
        Ok(EntryKind::File) => {
            let path = config.display_path(&relative_path);
            if !config.includes(&path) {
                return Fragment::default();
            }
            trace_entry!(path = %path.display(), "emitting file");
            Fragment {
                entries: vec![WalkEntry {
                    path,
                    relative_path,
                    depth,
                }],
                soft_errors: Vec::new(),
            }
        }
        Ok(EntryKind::Other) => Fragment::default(),
        Err(error) => Fragment::error(error),
    }
}
