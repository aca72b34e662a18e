use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem failure encountered while walking a tree.
///
/// The same type describes fatal failures (the traversal root cannot be
/// walked, returned from [`crate::WalkBuilder::build`]) and soft failures that
/// the walker absorbs and records while continuing with sibling entries.
#[derive(Debug)]
pub struct TraversalError {
    kind: TraversalErrorKind,
}

impl TraversalError {
    pub(crate) fn new(kind: TraversalErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn root_metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(TraversalErrorKind::RootMetadata { path, source })
    }

    pub(crate) fn not_a_directory(path: PathBuf) -> Self {
        Self::new(TraversalErrorKind::NotADirectory { path })
    }

    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(TraversalErrorKind::ReadDir { path, source })
    }

    pub(crate) fn read_dir_entry(path: PathBuf, source: io::Error) -> Self {
        Self::new(TraversalErrorKind::ReadDirEntry { path, source })
    }

    pub(crate) fn metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(TraversalErrorKind::Metadata { path, source })
    }

    pub(crate) fn dangling_symlink(path: PathBuf, source: io::Error) -> Self {
        Self::new(TraversalErrorKind::DanglingSymlink { path, source })
    }

    pub(crate) fn canonicalize(path: PathBuf, source: io::Error) -> Self {
        Self::new(TraversalErrorKind::Canonicalize { path, source })
    }

    /// Returns the specific failure.
    #[must_use]
    pub fn kind(&self) -> &TraversalErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use walk::WalkBuilder;
    ///
    /// let error = match WalkBuilder::new("./definitely_missing_root").build() {
    ///     Ok(_) => panic!("missing root yields error"),
    ///     Err(error) => error,
    /// };
    /// assert!(error.path().ends_with("definitely_missing_root"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }

    /// Returns the operating-system error behind the failure, if any.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        self.kind.io_error()
    }

    /// Reports whether the failure was caused by missing permissions.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.io_error()
            .is_some_and(|error| error.kind() == io::ErrorKind::PermissionDenied)
    }
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TraversalErrorKind::RootMetadata { path, source } => {
                write!(
                    f,
                    "failed to inspect traversal root '{}': {}",
                    path.display(),
                    source
                )
            }
            TraversalErrorKind::NotADirectory { path } => {
                write!(f, "traversal root '{}' is not a directory", path.display())
            }
            TraversalErrorKind::ReadDir { path, source } => {
                write!(
                    f,
                    "failed to read directory '{}': {}",
                    path.display(),
                    source
                )
            }
            TraversalErrorKind::ReadDirEntry { path, source } => {
                write!(
                    f,
                    "failed to read entry in '{}': {}",
                    path.display(),
                    source
                )
            }
            TraversalErrorKind::Metadata { path, source } => {
                write!(
                    f,
                    "failed to inspect metadata for '{}': {}",
                    path.display(),
                    source
                )
            }
            TraversalErrorKind::DanglingSymlink { path, source } => {
                write!(
                    f,
                    "failed to resolve symlink '{}': {}",
                    path.display(),
                    source
                )
            }
            TraversalErrorKind::Canonicalize { path, source } => {
                write!(f, "failed to canonicalize '{}': {}", path.display(), source)
            }
        }
    }
}

impl Error for TraversalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.kind.io_error().map(|error| error as &(dyn Error + 'static))
    }
}

/// Classification of traversal failures.
#[derive(Debug)]
pub enum TraversalErrorKind {
    /// Failed to query metadata for the traversal root.
    RootMetadata {
        /// Root path that failed to provide metadata.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// The traversal root exists but is not a directory.
    NotADirectory {
        /// Root path that was expected to be a directory.
        path: PathBuf,
    },
    /// Failed to read the contents of a directory.
    ReadDir {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to obtain a directory entry during iteration.
    ReadDirEntry {
        /// Directory containing the problematic entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to retrieve metadata for an entry, usually because it vanished.
    Metadata {
        /// Path whose metadata could not be retrieved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// A symbolic link whose target cannot be resolved.
    DanglingSymlink {
        /// Path of the link itself.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to canonicalize a directory path while preventing cycles.
    Canonicalize {
        /// Directory path that failed to canonicalize.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl TraversalErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::RootMetadata { path, .. }
            | Self::NotADirectory { path }
            | Self::ReadDir { path, .. }
            | Self::ReadDirEntry { path, .. }
            | Self::Metadata { path, .. }
            | Self::DanglingSymlink { path, .. }
            | Self::Canonicalize { path, .. } => path,
        }
    }

    /// Returns the underlying operating-system error, if the failure has one.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::NotADirectory { .. } => None,
            Self::RootMetadata { source, .. }
            | Self::ReadDir { source, .. }
            | Self::ReadDirEntry { source, .. }
            | Self::Metadata { source, .. }
            | Self::DanglingSymlink { source, .. }
            | Self::Canonicalize { source, .. } => Some(source),
        }
    }
}
