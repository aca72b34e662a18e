//! Per-directory and per-entry steps shared by the sequential and parallel
//! walkers.

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use logging::{trace_walk, warn_walk};

use crate::{CancelToken, TraversalError};

pub(crate) type ExcludePredicate = Arc<dyn Fn(&OsStr) -> bool + Send + Sync>;
pub(crate) type IncludePredicate = Arc<dyn Fn(&Path) -> bool + Send + Sync>;

/// Immutable settings for one traversal.
pub(crate) struct WalkConfig {
    pub(crate) display_root: PathBuf,
    pub(crate) follow_symlinks: bool,
    pub(crate) exclude: Option<ExcludePredicate>,
    pub(crate) include: Option<IncludePredicate>,
    pub(crate) cancel: CancelToken,
}

impl WalkConfig {
    pub(crate) fn excludes(&self, name: &OsStr) -> bool {
        self.exclude.as_ref().is_some_and(|exclude| exclude(name))
    }

    pub(crate) fn includes(&self, path: &Path) -> bool {
        self.include.as_ref().is_none_or(|include| include(path))
    }

    /// Joins `relative` onto the root exactly as the caller spelled it.
    pub(crate) fn display_path(&self, relative: &Path) -> PathBuf {
        self.display_root.join(relative)
    }
}

/// Names read from one directory plus the entries that failed to read.
pub(crate) struct Listing {
    pub(crate) names: Vec<OsString>,
    pub(crate) errors: Vec<TraversalError>,
}

/// Root directory validated and listed before traversal starts.
pub(crate) struct OpenedRoot {
    pub(crate) fs_path: PathBuf,
    pub(crate) canonical: PathBuf,
    pub(crate) listing: Listing,
}

/// Resolves, validates, canonicalizes, and lists the traversal root.
///
/// Every failure here is fatal for the traversal.
pub(crate) fn open_root(root: &Path) -> Result<OpenedRoot, TraversalError> {
    let fs_path = if root.as_os_str().is_empty() {
        absolutize(Path::new("."))?
    } else {
        absolutize(root)?
    };

    let metadata = fs::metadata(&fs_path)
        .map_err(|error| TraversalError::root_metadata(fs_path.clone(), error))?;
    if !metadata.is_dir() {
        return Err(TraversalError::not_a_directory(fs_path));
    }

    let canonical = fs::canonicalize(&fs_path)
        .map_err(|error| TraversalError::canonicalize(fs_path.clone(), error))?;
    let listing = read_listing(&fs_path)?;
    trace_walk!(
        root = %fs_path.display(),
        entries = listing.names.len(),
        "opened traversal root"
    );

    Ok(OpenedRoot {
        fs_path,
        canonical,
        listing,
    })
}

/// Lists `dir` in raw enumeration order.
pub(crate) fn read_listing(dir: &Path) -> Result<Listing, TraversalError> {
    let read_dir =
        fs::read_dir(dir).map_err(|error| TraversalError::read_dir(dir.to_path_buf(), error))?;

    let mut names = Vec::new();
    let mut errors = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => names.push(entry.file_name()),
            Err(error) => errors.push(TraversalError::read_dir_entry(dir.to_path_buf(), error)),
        }
    }

    trace_walk!(dir = %dir.display(), entries = names.len(), "listed directory");
    Ok(Listing { names, errors })
}

/// What the walker should do with a non-excluded entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EntryKind {
    Directory,
    File,
    Other,
}

/// Classifies `full_path`, resolving one level of symbolic link when enabled.
pub(crate) fn classify(config: &WalkConfig, full_path: &Path) -> Result<EntryKind, TraversalError> {
    let metadata = fs::symlink_metadata(full_path)
        .map_err(|error| TraversalError::metadata(full_path.to_path_buf(), error))?;
    let file_type = metadata.file_type();

    if file_type.is_dir() {
        return Ok(EntryKind::Directory);
    }
    if file_type.is_file() {
        return Ok(EntryKind::File);
    }
    if !file_type.is_symlink() || !config.follow_symlinks {
        return Ok(EntryKind::Other);
    }

    match fs::metadata(full_path) {
        Ok(target) if target.is_dir() => Ok(EntryKind::Directory),
        Ok(target) if target.is_file() => Ok(EntryKind::File),
        Ok(_) => Ok(EntryKind::Other),
        Err(error) => Err(TraversalError::dangling_symlink(
            full_path.to_path_buf(),
            error,
        )),
    }
}

/// Logs an absorbed failure; callers store it with the outcome.
pub(crate) fn report_soft_error(error: &TraversalError) {
    warn_walk!(path = %error.path().display(), "{error}");
}

fn absolutize(path: &Path) -> Result<PathBuf, TraversalError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = env::current_dir()
            .map_err(|error| TraversalError::canonicalize(PathBuf::from("."), error))?;
        Ok(cwd.join(path))
    }
}
