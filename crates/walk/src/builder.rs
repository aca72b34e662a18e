use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use logging::trace_walk;

use crate::cancel::CancelToken;
use crate::error::TraversalError;
use crate::outcome::WalkOutcome;
use crate::visit::{ExcludePredicate, IncludePredicate, OpenedRoot, WalkConfig, open_root};
use crate::walker::Walker;

/// Configures a filesystem traversal rooted at a specific path.
///
/// The root is always resolved through symbolic links. Entries below it are
/// resolved one level when [`follow_symlinks`](Self::follow_symlinks) is
/// enabled (the default).
#[derive(Clone)]
pub struct WalkBuilder {
    root: PathBuf,
    follow_symlinks: bool,
    exclude: Option<ExcludePredicate>,
    include: Option<IncludePredicate>,
    cancel: CancelToken,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            follow_symlinks: true,
            exclude: None,
            include: None,
            cancel: CancelToken::new(),
        }
    }

    /// Configures whether symbolic links below the root are resolved.
    ///
    /// When enabled, a link to a directory is descended, a link to a regular
    /// file is treated as that file, and a dangling link is recorded as a soft
    /// error. When disabled, every link is skipped.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sets the predicate that prunes entries by bare name.
    ///
    /// An excluded directory is never opened, so nothing beneath it is
    /// visited.
    #[must_use]
    pub fn exclude<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&OsStr) -> bool + Send + Sync + 'static,
    {
        self.exclude = Some(Arc::new(predicate));
        self
    }

    /// Sets the predicate that a regular file's root-form path must satisfy
    /// to be emitted.
    #[must_use]
    pub fn include<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.include = Some(Arc::new(predicate));
        self
    }

    /// Attaches a token that can stop the traversal early.
    #[must_use]
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Opens the root and returns a lazy [`Walker`].
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError`] when the root does not exist, is not a
    /// directory, or cannot be listed.
    pub fn build(self) -> Result<Walker, TraversalError> {
        let (config, root) = self.open()?;
        Ok(Walker::new(config, root))
    }

    /// Walks the whole tree on the current thread.
    ///
    /// # Errors
    ///
    /// Same conditions as [`build`](Self::build).
    pub fn run(self) -> Result<WalkOutcome, TraversalError> {
        Ok(self.build()?.run())
    }

    /// Walks the tree, descending sibling directories on the rayon pool.
    ///
    /// Entries come back in the same order [`run`](Self::run) would produce.
    ///
    /// # Errors
    ///
    /// Same conditions as [`build`](Self::build).
    #[cfg(feature = "parallel")]
    pub fn run_parallel(self) -> Result<WalkOutcome, TraversalError> {
        let (config, root) = self.open()?;
        Ok(crate::parallel::walk(&config, root))
    }

    fn open(self) -> Result<(WalkConfig, OpenedRoot), TraversalError> {
        let root = open_root(&self.root)?;
        trace_walk!(
            root = %self.root.display(),
            follow_symlinks = self.follow_symlinks,
            "starting traversal"
        );
        let config = WalkConfig {
            display_root: self.root,
            follow_symlinks: self.follow_symlinks,
            exclude: self.exclude,
            include: self.include,
            cancel: self.cancel,
        };
        Ok((config, root))
    }
}

impl fmt::Debug for WalkBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalkBuilder")
            .field("root", &self.root)
            .field("follow_symlinks", &self.follow_symlinks)
            .field("exclude", &self.exclude.is_some())
            .field("include", &self.include.is_some())
            .field("cancel", &self.cancel)
            .finish()
    }
}
