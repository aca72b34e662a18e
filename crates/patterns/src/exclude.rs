use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use logging::trace_filter;
use regex::bytes::{Regex, RegexBuilder};

use crate::PatternCompilationError;

/// Matching language used for exclude patterns.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PatternSyntax {
    /// Regular-expression fragments joined with `|`.
    ///
    /// A name is excluded when the alternation matches anywhere inside it.
    /// Metacharacters keep their meaning, so `.git` also matches `xgit`.
    #[default]
    Regex,
    /// Plain substrings; metacharacters are escaped before compilation.
    Literal,
    /// Shell globs matched against the whole entry name.
    Glob,
}

impl PatternSyntax {
    /// Returns the canonical lowercase name of the syntax.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regex => "regex",
            Self::Literal => "literal",
            Self::Glob => "glob",
        }
    }
}

impl fmt::Display for PatternSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`PatternSyntax`] name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown pattern syntax '{0}' (expected regex, literal, or glob)")]
pub struct UnknownSyntax(String);

impl FromStr for PatternSyntax {
    type Err = UnknownSyntax;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "regex" | "regexp" => Ok(Self::Regex),
            "literal" | "substring" => Ok(Self::Literal),
            "glob" => Ok(Self::Glob),
            _ => Err(UnknownSyntax(value.to_owned())),
        }
    }
}

#[derive(Clone, Debug)]
enum Matcher {
    Nothing,
    Regex(Regex),
    Glob(GlobSet),
}

/// Compiled exclude predicate applied to directory-entry names.
#[derive(Clone, Debug)]
pub struct ExcludeFilter {
    patterns: Vec<String>,
    syntax: PatternSyntax,
    matcher: Matcher,
}

impl Default for ExcludeFilter {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            syntax: PatternSyntax::default(),
            matcher: Matcher::Nothing,
        }
    }
}

impl ExcludeFilter {
    /// Compiles `patterns` into a single case-insensitive matcher.
    ///
    /// An empty pattern list produces a filter that excludes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PatternCompilationError`] when the engine for `syntax`
    /// rejects the patterns (for example an unbalanced `[` under
    /// [`PatternSyntax::Regex`] or [`PatternSyntax::Glob`]).
    pub fn new<I, S>(patterns: I, syntax: PatternSyntax) -> Result<Self, PatternCompilationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        if patterns.is_empty() {
            return Ok(Self {
                patterns,
                syntax,
                matcher: Matcher::Nothing,
            });
        }

        let matcher = match syntax {
            PatternSyntax::Regex => compile_alternation(&patterns.join("|"))
                .map(Matcher::Regex)
                .map_err(|error| PatternCompilationError::new(patterns.clone(), syntax, error))?,
            PatternSyntax::Literal => {
                let escaped: Vec<String> = patterns.iter().map(|p| regex::escape(p)).collect();
                compile_alternation(&escaped.join("|"))
                    .map(Matcher::Regex)
                    .map_err(|error| {
                        PatternCompilationError::new(patterns.clone(), syntax, error)
                    })?
            }
            PatternSyntax::Glob => compile_globs(&patterns)
                .map(Matcher::Glob)
                .map_err(|error| PatternCompilationError::new(patterns.clone(), syntax, error))?,
        };

        trace_filter!(
            count = patterns.len(),
            syntax = syntax.as_str(),
            "compiled exclude patterns"
        );

        Ok(Self {
            patterns,
            syntax,
            matcher,
        })
    }

    /// Returns the raw patterns in definition order.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the syntax the patterns were compiled with.
    #[must_use]
    pub const fn syntax(&self) -> PatternSyntax {
        self.syntax
    }

    /// Returns `true` when the filter excludes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.matcher, Matcher::Nothing)
    }

    /// Returns `true` if the entry called `name` must be pruned.
    #[must_use]
    pub fn matches(&self, name: &OsStr) -> bool {
        match &self.matcher {
            Matcher::Nothing => false,
            Matcher::Regex(regex) => regex.is_match(name.as_encoded_bytes()),
            Matcher::Glob(set) => set.is_match(Path::new(name)),
        }
    }
}

fn compile_alternation(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

fn compile_globs(patterns: &[String]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .literal_separator(true)
            .backslash_escape(true)
            .build()?;
        builder.add(glob);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str) -> &OsStr {
        OsStr::new(value)
    }

    #[test]
    fn empty_filter_excludes_nothing() {
        let filter = ExcludeFilter::new(Vec::<String>::new(), PatternSyntax::Regex).unwrap();
        assert!(filter.is_empty());
        assert!(!filter.matches(name("node_modules")));
        assert!(!filter.matches(name("")));
    }

    #[test]
    fn regex_alternation_matches_substrings_case_insensitively() {
        let filter = ExcludeFilter::new(["node_modules", ".git"], PatternSyntax::Regex).unwrap();
        assert!(filter.matches(name("node_modules")));
        assert!(filter.matches(name("NODE_MODULES")));
        assert!(filter.matches(name("old_node_modules_backup")));
        assert!(filter.matches(name(".git")));
        assert!(filter.matches(name(".gitignore")));
        assert!(!filter.matches(name("src")));
    }

    #[test]
    fn regex_metacharacters_keep_their_meaning() {
        let filter = ExcludeFilter::new([".git"], PatternSyntax::Regex).unwrap();
        assert!(filter.matches(name("xgit")));

        let anchored = ExcludeFilter::new(["^build$"], PatternSyntax::Regex).unwrap();
        assert!(anchored.matches(name("build")));
        assert!(!anchored.matches(name("rebuild")));
    }

    #[test]
    fn literal_syntax_escapes_metacharacters() {
        let filter = ExcludeFilter::new([".git", "[tmp]"], PatternSyntax::Literal).unwrap();
        assert!(filter.matches(name(".git")));
        assert!(filter.matches(name("a[TMP]b")));
        assert!(!filter.matches(name("xgit")));
        assert!(!filter.matches(name("t")));
    }

    #[test]
    fn glob_syntax_matches_whole_names() {
        let filter = ExcludeFilter::new(["*.log", "target"], PatternSyntax::Glob).unwrap();
        assert!(filter.matches(name("debug.log")));
        assert!(filter.matches(name("DEBUG.LOG")));
        assert!(filter.matches(name("target")));
        assert!(!filter.matches(name("target-dir")));
        assert!(!filter.matches(name("log.txt")));
    }

    #[test]
    fn invalid_regex_reports_all_patterns() {
        let error = ExcludeFilter::new(["ok", "[broken"], PatternSyntax::Regex).unwrap_err();
        assert_eq!(error.patterns(), ["ok", "[broken"]);
        assert_eq!(error.syntax(), PatternSyntax::Regex);
    }

    #[test]
    fn invalid_glob_is_reported() {
        let error = ExcludeFilter::new(["["], PatternSyntax::Glob).unwrap_err();
        assert_eq!(error.syntax(), PatternSyntax::Glob);
    }

    #[test]
    fn literal_syntax_never_fails() {
        assert!(ExcludeFilter::new(["[", "(", "\\"], PatternSyntax::Literal).is_ok());
    }

    #[test]
    fn syntax_names_round_trip() {
        for syntax in [PatternSyntax::Regex, PatternSyntax::Literal, PatternSyntax::Glob] {
            assert_eq!(syntax.to_string().parse::<PatternSyntax>(), Ok(syntax));
        }
        assert_eq!("GLOB".parse::<PatternSyntax>(), Ok(PatternSyntax::Glob));
        assert!("fnmatch".parse::<PatternSyntax>().is_err());
    }
}
