use thiserror::Error;

use crate::PatternSyntax;

/// Error produced when exclude patterns cannot be compiled into a matcher.
///
/// The error keeps the complete raw pattern list because the patterns are
/// compiled together; an individual culprit is not always identifiable.
#[derive(Debug, Error)]
#[error(
    "failed to compile {syntax} exclude patterns [{}]: {source}",
    .patterns.join(", ")
)]
pub struct PatternCompilationError {
    patterns: Vec<String>,
    syntax: PatternSyntax,
    #[source]
    source: PatternEngineError,
}

impl PatternCompilationError {
    pub(crate) fn new(
        patterns: Vec<String>,
        syntax: PatternSyntax,
        source: impl Into<PatternEngineError>,
    ) -> Self {
        Self {
            patterns,
            syntax,
            source: source.into(),
        }
    }

    /// Returns the raw patterns that failed to compile.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the syntax the patterns were compiled with.
    #[must_use]
    pub const fn syntax(&self) -> PatternSyntax {
        self.syntax
    }

    /// Returns the underlying matching-engine error.
    #[must_use]
    pub const fn engine_error(&self) -> &PatternEngineError {
        &self.source
    }
}

/// Failure reported by the matching engine backing a [`PatternSyntax`].
#[derive(Debug, Error)]
pub enum PatternEngineError {
    /// The regular-expression engine rejected the joined alternation.
    #[error(transparent)]
    Regex(#[from] regex::Error),
    /// The glob engine rejected one of the patterns.
    #[error(transparent)]
    Glob(#[from] globset::Error),
}
