use patterns::PatternSyntax;

/// Knobs that shape a listing without changing what it matches.
///
/// # Examples
///
/// ```
/// use listing::ListOptions;
/// use patterns::PatternSyntax;
///
/// let options = ListOptions::new()
///     .exclude_syntax(PatternSyntax::Glob)
///     .sort(true);
/// assert_eq!(options.syntax(), PatternSyntax::Glob);
/// assert!(options.follows_symlinks());
/// assert!(options.sorts());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListOptions {
    exclude_syntax: PatternSyntax,
    follow_symlinks: bool,
    parallel: bool,
    sort: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            exclude_syntax: PatternSyntax::Regex,
            follow_symlinks: true,
            parallel: false,
            sort: false,
        }
    }
}

impl ListOptions {
    /// Returns the default options: regex excludes, symlinks followed,
    /// sequential walk, enumeration order kept.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects how exclude patterns are interpreted.
    #[must_use]
    pub const fn exclude_syntax(mut self, syntax: PatternSyntax) -> Self {
        self.exclude_syntax = syntax;
        self
    }

    /// Controls whether symbolic links below the root are resolved.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Requests the rayon-backed walker.
    ///
    /// Ignored unless the crate is built with the `parallel` feature.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sorts the result by path once the walk finishes.
    #[must_use]
    pub const fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Returns the exclude pattern syntax.
    #[must_use]
    pub const fn syntax(&self) -> PatternSyntax {
        self.exclude_syntax
    }

    /// Reports whether symbolic links are resolved.
    #[must_use]
    pub const fn follows_symlinks(&self) -> bool {
        self.follow_symlinks
    }

    /// Reports whether the parallel walker was requested.
    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Reports whether results are sorted.
    #[must_use]
    pub const fn sorts(&self) -> bool {
        self.sort
    }
}
