use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use patterns::{PatternSyntax, UnknownSyntax};

/// Program name used in help, version, and diagnostic output.
pub(crate) const PROGRAM_NAME: &str = "file-list";

/// Exclude list applied when `--exclude` is not given.
pub(crate) const DEFAULT_EXCLUDE: &str = "node_modules";

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .about("List the regular files below a directory, filtered by suffix and name.")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("include")
                .long("include")
                .value_name("LIST")
                .help("Comma-separated suffixes a file path must end with (repeatable).")
                .value_parser(clap::value_parser!(String))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .value_name("LIST")
                .help("Comma-separated patterns that prune matching entry names [default: node_modules].")
                .value_parser(clap::value_parser!(String))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("exclude-syntax")
                .long("exclude-syntax")
                .value_name("SYNTAX")
                .help("How exclude patterns are read: regex, literal, or glob [default: regex].")
                .value_parser(parse_syntax),
        )
        .arg(
            Arg::new("no-follow-symlinks")
                .long("no-follow-symlinks")
                .help("Skip symbolic links instead of resolving them.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .help("Sort the output by path.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the result as a JSON document.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Walk sibling directories in parallel.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with status 23 when any subtree could not be read.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase logging verbosity (repeatable).")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("directory")
                .value_name("DIRECTORY")
                .help("Directory to list [default: current directory].")
                .value_parser(OsStringValueParser::new()),
        )
}

fn parse_syntax(value: &str) -> Result<PatternSyntax, UnknownSyntax> {
    value.parse()
}
