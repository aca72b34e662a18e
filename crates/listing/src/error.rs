use std::path::Path;

use patterns::PatternCompilationError;
use thiserror::Error;
use walk::TraversalError;

/// Fatal failure of a listing call.
#[derive(Debug, Error)]
pub enum ListError {
    /// The exclude patterns could not be compiled.
    #[error(transparent)]
    Pattern(#[from] PatternCompilationError),
    /// The root directory could not be walked.
    #[error(transparent)]
    Traversal(#[from] TraversalError),
}

impl ListError {
    /// Returns the root path for traversal failures.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Pattern(_) => None,
            Self::Traversal(error) => Some(error.path()),
        }
    }
}
