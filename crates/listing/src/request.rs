use std::path::{Path, PathBuf};

use patterns::parse_list;

use crate::ListOptions;

/// Everything needed for one call to [`crate::list_files`].
///
/// A relative root is resolved against the process working directory and an
/// empty root means the working directory itself. Pattern lists may contain
/// untrimmed or empty entries; they are cleaned up when the patterns are
/// compiled.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalRequest {
    /// Directory whose subtree is listed.
    pub root_directory: PathBuf,
    /// Literal suffixes a file path must end with; empty matches every file.
    #[cfg_attr(feature = "serde", serde(default))]
    pub include_patterns: Vec<String>,
    /// Patterns matched against entry names to prune them.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclude_patterns: Vec<String>,
    /// Traversal options.
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: ListOptions,
}

impl TraversalRequest {
    /// Creates a request that lists every file below `root`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root_directory: root.into(),
            ..Self::default()
        }
    }

    /// Builds a request from comma-separated include and exclude strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use listing::TraversalRequest;
    ///
    /// let request = TraversalRequest::from_raw("src", " .ts , .tsx ,", "node_modules,dist");
    /// assert_eq!(request.include_patterns, [".ts", ".tsx"]);
    /// assert_eq!(request.exclude_patterns, ["node_modules", "dist"]);
    /// ```
    #[must_use]
    pub fn from_raw<P: Into<PathBuf>>(root: P, include: &str, exclude: &str) -> Self {
        Self {
            root_directory: root.into(),
            include_patterns: parse_list(include),
            exclude_patterns: parse_list(exclude),
            options: ListOptions::default(),
        }
    }

    /// Replaces the include suffixes.
    #[must_use]
    pub fn include<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the exclude patterns.
    #[must_use]
    pub fn exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the options.
    #[must_use]
    pub const fn options(mut self, options: ListOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root_directory
    }
}
