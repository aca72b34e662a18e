#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Command-line front end for the `file-list` binary.
//!
//! [`run`] parses arguments with `clap`, builds a
//! [`listing::TraversalRequest`], prints the resulting paths (or a JSON
//! document with `--json`), and returns the process exit status. Subtree
//! failures are printed as warnings on standard error; `--strict` turns them
//! into exit status [`EXIT_PARTIAL`].
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["file-list", "--version"], &mut stdout, &mut stderr);
//! assert_eq!(status, cli::EXIT_SUCCESS);
//! assert!(String::from_utf8_lossy(&stdout).starts_with("file-list "));
//! ```

mod args;
mod command;
mod render;

use std::ffi::OsString;
use std::io::Write;

use listing::{ListError, list_files};
use logging::trace_list;

use crate::args::parse_args;
use crate::command::{PROGRAM_NAME, clap_command};
use crate::render::{write_error, write_json, write_paths, write_soft_errors};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// The listing completed.
pub const EXIT_SUCCESS: i32 = 0;
/// The command line could not be parsed.
pub const EXIT_USAGE: i32 = 1;
/// An exclude pattern failed to compile.
pub const EXIT_PATTERN: i32 = 2;
/// The root directory could not be walked.
pub const EXIT_ROOT: i32 = 3;
/// Writing the output failed.
pub const EXIT_OUTPUT: i32 = 4;
/// Some subtrees could not be read and `--strict` was given.
pub const EXIT_PARTIAL: i32 = 23;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The first argument is the program name, as with [`std::env::args_os`].
/// The return value is the process exit status.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => {
            let _ = write!(stderr, "{}", error.render());
            return EXIT_USAGE;
        }
    };

    if parsed.show_help {
        let help = clap_command().render_help();
        return match write!(stdout, "{help}") {
            Ok(()) => EXIT_SUCCESS,
            Err(_) => EXIT_OUTPUT,
        };
    }
    if parsed.show_version {
        return match writeln!(stdout, "{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION")) {
            Ok(()) => EXIT_SUCCESS,
            Err(_) => EXIT_OUTPUT,
        };
    }

    // A second initialisation in the same process keeps the first subscriber.
    let _ = logging::init_tracing(parsed.verbosity());

    let request = parsed.request();
    let result = match list_files(&request) {
        Ok(result) => result,
        Err(error) => {
            let status = match &error {
                ListError::Pattern(_) => EXIT_PATTERN,
                ListError::Traversal(_) => EXIT_ROOT,
            };
            let _ = write_error(stderr, &error);
            return status;
        }
    };

    let written = if parsed.json {
        write_json(&result, stdout)
    } else {
        write_paths(&result, stdout)
    };
    if let Err(error) = written {
        let _ = write_error(stderr, &error);
        return EXIT_OUTPUT;
    }
    let _ = write_soft_errors(&result, stderr);

    trace_list!(
        files = result.len(),
        soft_errors = result.soft_errors().len(),
        strict = parsed.strict,
        "cli finished"
    );

    if parsed.strict && !result.soft_errors().is_empty() {
        EXIT_PARTIAL
    } else {
        EXIT_SUCCESS
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
