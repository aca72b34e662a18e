use std::path::Path;

/// Suffix filter deciding which discovered files are emitted.
///
/// An empty filter accepts every path.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IncludeFilter {
    suffixes: Vec<String>,
}

impl IncludeFilter {
    /// Creates a filter accepting paths that end with any of `suffixes`.
    #[must_use]
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the configured suffixes in definition order.
    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Returns `true` when no suffix is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Returns `true` if `path` should be emitted.
    ///
    /// The comparison is a case-sensitive byte suffix test on the path as it
    /// will be reported, so `.ts` matches `src/a.ts` but not `src/a.TS`.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        if self.suffixes.is_empty() {
            return true;
        }
        let bytes = path.as_os_str().as_encoded_bytes();
        self.suffixes
            .iter()
            .any(|suffix| bytes.ends_with(suffix.as_bytes()))
    }
}
