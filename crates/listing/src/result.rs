use std::path::{Path, PathBuf};
use std::slice;
use std::vec;

use walk::{TraversalError, WalkEntry, WalkOutcome};

/// Regular file discovered by a listing.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct FileEntry {
    path: PathBuf,
    relative_path: PathBuf,
}

impl FileEntry {
    /// Returns the path in the form of the request root.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path below the request root.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Consumes the entry and returns its path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl From<WalkEntry> for FileEntry {
    fn from(entry: WalkEntry) -> Self {
        Self {
            relative_path: entry.relative_path().to_path_buf(),
            path: entry.into_path(),
        }
    }
}

/// Files found by a listing together with the failures it absorbed.
///
/// Entries are in depth-first pre-order with siblings in filesystem
/// enumeration order, unless the request asked for sorting.
#[derive(Debug, Default)]
pub struct TraversalResult {
    entries: Vec<FileEntry>,
    soft_errors: Vec<TraversalError>,
    cancelled: bool,
}

impl TraversalResult {
    /// Returns the discovered files.
    #[must_use]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Returns subtree failures that were skipped over.
    #[must_use]
    pub fn soft_errors(&self) -> &[TraversalError] {
        &self.soft_errors
    }

    /// Reports whether the listing stopped early because it was cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Returns the number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether no files were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the file paths in result order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> + '_ {
        self.entries.iter().map(FileEntry::path)
    }

    /// Sorts the entries by path.
    pub fn sort(&mut self) {
        self.entries.sort_unstable();
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }
}

impl From<WalkOutcome> for TraversalResult {
    fn from(outcome: WalkOutcome) -> Self {
        Self {
            entries: outcome.entries.into_iter().map(FileEntry::from).collect(),
            soft_errors: outcome.soft_errors,
            cancelled: outcome.cancelled,
        }
    }
}

impl IntoIterator for TraversalResult {
    type Item = FileEntry;
    type IntoIter = vec::IntoIter<FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a TraversalResult {
    type Item = &'a FileEntry;
    type IntoIter = slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
mod serialize {
    use std::path::Path;

    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use super::{FileEntry, TraversalResult};

    /// Paths are written lossily so any filename serializes; names that are
    /// not valid UTF-8 also carry their raw bytes.
    impl Serialize for FileEntry {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let raw = self.path.to_str().is_none();
            let mut state = serializer.serialize_struct("FileEntry", 2 + usize::from(raw))?;
            state.serialize_field("path", &self.path.to_string_lossy())?;
            state.serialize_field("relative_path", &self.relative_path.to_string_lossy())?;
            if raw {
                state.serialize_field("path_bytes", self.path.as_os_str().as_encoded_bytes())?;
            }
            state.end()
        }
    }

    #[derive(serde::Serialize)]
    struct SoftError {
        path: String,
        message: String,
    }

    fn soft_error(path: &Path, message: String) -> SoftError {
        SoftError {
            path: path.to_string_lossy().into_owned(),
            message,
        }
    }

    impl Serialize for TraversalResult {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let soft_errors: Vec<SoftError> = self
                .soft_errors
                .iter()
                .map(|error| soft_error(error.path(), error.to_string()))
                .collect();

            let mut state = serializer.serialize_struct("TraversalResult", 3)?;
            state.serialize_field("entries", &self.entries)?;
            state.serialize_field("soft_errors", &soft_errors)?;
            state.serialize_field("cancelled", &self.cancelled)?;
            state.end()
        }
    }
}
