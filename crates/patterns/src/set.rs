use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;

use crate::{ExcludeFilter, IncludeFilter, PatternCompilationError, PatternSyntax, parse_list};

#[derive(Debug, Default)]
struct PatternSetInner {
    include: IncludeFilter,
    exclude: ExcludeFilter,
}

/// Compiled, immutable include/exclude predicates for one traversal.
///
/// `PatternSet` is cheaply cloneable (the inner state is behind an [`Arc`]),
/// which lets every worker of a parallel traversal hold its own handle.
///
/// # Examples
///
/// ```
/// use patterns::{PatternSet, PatternSyntax};
/// use std::ffi::OsStr;
/// use std::path::Path;
///
/// let set = PatternSet::new([".ts"], ["node_modules"], PatternSyntax::Regex).unwrap();
/// let include = set.include_predicate();
/// let exclude = set.exclude_predicate();
///
/// assert!(include(Path::new("a.ts")));
/// assert!(!include(Path::new("b.js")));
/// assert!(exclude(OsStr::new("node_modules")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    inner: Arc<PatternSetInner>,
}

impl PatternSet {
    /// Builds a set from already-split include suffixes and exclude patterns.
    ///
    /// Patterns are trimmed and empty entries discarded, so callers may pass
    /// user input through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PatternCompilationError`] if the exclude patterns cannot be
    /// compiled with `syntax`.
    pub fn new<I, E, S, T>(
        include: I,
        exclude: E,
        syntax: PatternSyntax,
    ) -> Result<Self, PatternCompilationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let include = IncludeFilter::new(normalise(include));
        let exclude = ExcludeFilter::new(normalise(exclude), syntax)?;

        Ok(Self {
            inner: Arc::new(PatternSetInner { include, exclude }),
        })
    }

    /// Builds a set from raw comma-separated include and exclude strings.
    ///
    /// # Errors
    ///
    /// Returns [`PatternCompilationError`] if the exclude patterns cannot be
    /// compiled with `syntax`.
    pub fn from_raw(
        include: &str,
        exclude: &str,
        syntax: PatternSyntax,
    ) -> Result<Self, PatternCompilationError> {
        Self::new(parse_list(include), parse_list(exclude), syntax)
    }

    /// Returns `true` if neither include nor exclude patterns are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.include.is_empty() && self.inner.exclude.is_empty()
    }

    /// Returns the include filter.
    #[must_use]
    pub fn include(&self) -> &IncludeFilter {
        &self.inner.include
    }

    /// Returns the exclude filter.
    #[must_use]
    pub fn exclude(&self) -> &ExcludeFilter {
        &self.inner.exclude
    }

    /// Returns `true` if a regular file reported as `path` should be emitted.
    #[must_use]
    pub fn includes(&self, path: &Path) -> bool {
        self.inner.include.matches(path)
    }

    /// Returns `true` if the directory entry called `name` must be pruned.
    #[must_use]
    pub fn excludes(&self, name: &OsStr) -> bool {
        self.inner.exclude.matches(name)
    }

    /// Returns an owned predicate wrapping [`includes`](Self::includes).
    #[must_use]
    pub fn include_predicate(&self) -> Box<dyn Fn(&Path) -> bool + Send + Sync> {
        let set = self.clone();
        Box::new(move |path| set.includes(path))
    }

    /// Returns an owned predicate wrapping [`excludes`](Self::excludes).
    #[must_use]
    pub fn exclude_predicate(&self) -> Box<dyn Fn(&OsStr) -> bool + Send + Sync> {
        let set = self.clone();
        Box::new(move |name| set.excludes(name))
    }
}

fn normalise<I, S>(patterns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|pattern| pattern.as_ref().trim().to_owned())
        .filter(|pattern| !pattern.is_empty())
        .collect()
}
