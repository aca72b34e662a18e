use std::ffi::OsString;
use std::path::PathBuf;

use listing::{ListOptions, TraversalRequest};
use logging::Verbosity;
use patterns::{PatternSyntax, parse_list};

use crate::command::{DEFAULT_EXCLUDE, PROGRAM_NAME, clap_command};

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) directory: Option<OsString>,
    pub(crate) includes: Vec<String>,
    pub(crate) excludes: Option<Vec<String>>,
    pub(crate) exclude_syntax: PatternSyntax,
    pub(crate) no_follow_symlinks: bool,
    pub(crate) sort: bool,
    pub(crate) json: bool,
    pub(crate) parallel: bool,
    pub(crate) strict: bool,
    pub(crate) verbose: u8,
}

impl ParsedArgs {
    pub(crate) fn verbosity(&self) -> Verbosity {
        Verbosity::from_verbose_level(self.verbose)
    }

    /// Converts the arguments into a listing request.
    ///
    /// Repeated `--include`/`--exclude` lists are concatenated. A missing
    /// `--exclude` falls back to [`DEFAULT_EXCLUDE`]; an explicit empty one
    /// disables exclusion.
    pub(crate) fn request(&self) -> TraversalRequest {
        let root = self
            .directory
            .as_ref()
            .map_or_else(PathBuf::new, PathBuf::from);
        let excludes = self
            .excludes
            .clone()
            .unwrap_or_else(|| parse_list(DEFAULT_EXCLUDE));
        let options = ListOptions::new()
            .exclude_syntax(self.exclude_syntax)
            .follow_symlinks(!self.no_follow_symlinks)
            .parallel(self.parallel)
            .sort(self.sort);

        TraversalRequest::new(root)
            .include(self.includes.iter().cloned())
            .exclude(excludes)
            .options(options)
    }
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let includes = matches
        .remove_many::<String>("include")
        .map(|values| values.flat_map(|value| parse_list(&value)).collect())
        .unwrap_or_default();
    let excludes = matches
        .remove_many::<String>("exclude")
        .map(|values| values.flat_map(|value| parse_list(&value)).collect());

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        directory: matches.remove_one::<OsString>("directory"),
        includes,
        excludes,
        exclude_syntax: matches
            .remove_one::<PatternSyntax>("exclude-syntax")
            .unwrap_or_default(),
        no_follow_symlinks: matches.get_flag("no-follow-symlinks"),
        sort: matches.get_flag("sort"),
        json: matches.get_flag("json"),
        parallel: matches.get_flag("parallel"),
        strict: matches.get_flag("strict"),
        verbose: matches.get_count("verbose"),
    })
}
